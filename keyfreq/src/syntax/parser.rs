//! Recursive-descent parser for keyfreq files
//!
//! ```text
//! Root   := '(' Record* ')'
//! Record := '(' Pair '.' Number ')'
//! Pair   := '(' Identifier '.' Identifier ')'
//! ```
//!
//! One lexeme of lookahead, no backtracking and no recovery. Totals are only
//! updated once a record has been read completely.

use crate::frequency::{FrequencyTables, UsagePair};
use crate::lexical::Tokenizer;
use crate::log_debug;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Lexeme, TokenKind};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

const ROOT: &str = "root";
const RECORD: &str = "record";
const PAIR: &str = "pair";

/// Counters collected during one parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub records: usize,
    pub lexemes: usize,
}

/// Result of a successful parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub tables: FrequencyTables,
    pub stats: ParseStats,
}

pub struct FrequencyParser<R> {
    tokenizer: Tokenizer<R>,
    tables: FrequencyTables,
    records: usize,
    /// Lexeme that ended the record repetition, consumed by `parse_root`
    terminator: Option<Lexeme>,
}

impl<R: BufRead> FrequencyParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokenizer: Tokenizer::new(reader),
            tables: FrequencyTables::new(),
            records: 0,
            terminator: None,
        }
    }

    /// `Root := '(' Record* ')'`
    pub fn parse_root(&mut self) -> SyntaxResult<()> {
        self.expect(TokenKind::OpenParen, ROOT)?;

        while self.parse_record()? {}

        match self.terminator.take() {
            Some(lexeme) if lexeme.is(TokenKind::CloseParen) => Ok(()),
            Some(lexeme) => Err(SyntaxError::unexpected_token(
                ROOT,
                TokenKind::CloseParen,
                &lexeme,
            )),
            None => Err(self.missing_lexeme(TokenKind::CloseParen, ROOT)),
        }
    }

    /// `Record := '(' Pair '.' Number ')'`
    ///
    /// Returns `Ok(false)` without consuming a record when the next lexeme is
    /// not `(`; that lexeme is kept for the caller. Once `(` has been read,
    /// every mismatch is an error.
    pub fn parse_record(&mut self) -> SyntaxResult<bool> {
        let lexeme = match self.next_lexeme() {
            Some(lexeme) if lexeme.is(TokenKind::OpenParen) => lexeme,
            other => {
                self.terminator = other;
                return Ok(false);
            }
        };

        let pair = self.parse_pair()?;
        self.expect(TokenKind::Dot, RECORD)?;

        let count_lexeme = self.expect(TokenKind::Number, RECORD)?;
        let count = count_lexeme
            .text
            .parse::<u64>()
            .map_err(|source| SyntaxError::InvalidCount {
                text: count_lexeme.text.clone(),
                position: count_lexeme.start(),
                source,
            })?;

        self.expect(TokenKind::CloseParen, RECORD)?;

        self.tables
            .record(&pair, count)
            .map_err(|source| SyntaxError::CountOverflow {
                position: count_lexeme.start(),
                source,
            })?;
        self.records += 1;

        log_debug!("Record parsed",
            "mode" => pair.mode,
            "function" => pair.function,
            "count" => count,
            "position" => lexeme.start()
        );

        Ok(true)
    }

    /// `Pair := '(' Identifier '.' Identifier ')'`
    pub fn parse_pair(&mut self) -> SyntaxResult<UsagePair> {
        self.expect(TokenKind::OpenParen, PAIR)?;
        let mode = self.expect(TokenKind::Identifier, PAIR)?;
        self.expect(TokenKind::Dot, PAIR)?;
        let function = self.expect(TokenKind::Identifier, PAIR)?;
        self.expect(TokenKind::CloseParen, PAIR)?;

        Ok(UsagePair::new(mode.text, function.text))
    }

    pub fn tables(&self) -> &FrequencyTables {
        &self.tables
    }

    pub fn stats(&self) -> ParseStats {
        ParseStats {
            records: self.records,
            lexemes: self.tokenizer.lexeme_count(),
        }
    }

    /// Hand the accumulated totals over
    pub fn finish(self) -> ParseOutcome {
        let stats = self.stats();
        ParseOutcome {
            tables: self.tables,
            stats,
        }
    }

    fn next_lexeme(&mut self) -> Option<Lexeme> {
        if self.tokenizer.advance() {
            self.tokenizer.current().cloned()
        } else {
            None
        }
    }

    fn expect(&mut self, expected: TokenKind, rule: &'static str) -> SyntaxResult<Lexeme> {
        match self.next_lexeme() {
            Some(lexeme) if lexeme.is(expected) => Ok(lexeme),
            Some(lexeme) => Err(SyntaxError::unexpected_token(rule, expected, &lexeme)),
            None => Err(self.missing_lexeme(expected, rule)),
        }
    }

    /// Explain why the tokenizer produced nothing
    fn missing_lexeme(&mut self, expected: TokenKind, rule: &'static str) -> SyntaxError {
        if let Some(error) = self.tokenizer.take_error() {
            return error.into();
        }

        match self.tokenizer.stray() {
            Some(stray) => SyntaxError::UnexpectedCharacter {
                rule,
                expected,
                character: stray.character,
                position: stray.position,
            },
            None => SyntaxError::UnexpectedEndOfInput {
                rule,
                expected,
                position: self.tokenizer.position(),
            },
        }
    }
}
