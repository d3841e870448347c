//! Lexical analysis: position tracking and tokenization
//!
//! [`PositionTracker`] turns a byte stream into positioned characters,
//! [`Tokenizer`] turns those into [`Lexeme`]s.

pub mod analyzer;
pub mod error;
pub mod reader;

use crate::tokens::Lexeme;
use std::io::{BufReader, Read};

pub use analyzer::{is_identifier_char, StrayCharacter, Tokenizer};
pub use error::LexicalError;
pub use reader::PositionTracker;

/// Collect every lexeme the tokenizer produces from `reader`
///
/// Stops silently where the tokenizer stops; only a read failure is an error.
pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Lexeme>, LexicalError> {
    let mut tokenizer = Tokenizer::new(BufReader::new(reader));
    let mut lexemes = Vec::new();

    while tokenizer.advance() {
        if let Some(lexeme) = tokenizer.current() {
            lexemes.push(lexeme.clone());
        }
    }

    match tokenizer.take_error() {
        Some(error) => Err(error),
        None => Ok(lexemes),
    }
}

/// [`tokenize`] over an in-memory string
pub fn tokenize_str(input: &str) -> Result<Vec<Lexeme>, LexicalError> {
    tokenize(input.as_bytes())
}
