//! Tokenizer for keyfreq files
//!
//! Whitespace is skipped before every lexeme. Recognition is tried in a fixed
//! order and the first rule that matches wins:
//!
//! 1. `(`, `)` and `.` as single-character tokens
//! 2. a maximal run of numeric characters as a number
//! 3. a maximal run of letters, digits and `- + : * & /` as an identifier
//!
//! Because numbers are tried first, `12ab` yields two lexemes. When nothing
//! matches, the tokenizer stops without producing a lexeme; a character that
//! stopped it is kept as [`StrayCharacter`] for the parser to report.

use super::error::LexicalError;
use super::reader::PositionTracker;
use crate::log_debug;
use crate::tokens::{Lexeme, TokenKind};
use crate::utils::{Position, Span};
use std::io::BufRead;

/// A character that matched no lexical rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrayCharacter {
    pub character: char,
    pub position: Position,
}

/// Characters allowed inside identifiers
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_numeric() || matches!(ch, '-' | '+' | ':' | '*' | '&' | '/')
}

pub struct Tokenizer<R> {
    reader: PositionTracker<R>,
    primed: bool,
    current: Option<Lexeme>,
    stray: Option<StrayCharacter>,
    lexeme_count: usize,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: PositionTracker::new(reader),
            primed: false,
            current: None,
            stray: None,
            lexeme_count: 0,
        }
    }

    /// Recognize the next lexeme
    ///
    /// Returns false when no lexeme could be produced: end of input, a read
    /// failure (see [`error`](Self::error)) or a stray character (see
    /// [`stray`](Self::stray)).
    pub fn advance(&mut self) -> bool {
        self.current = None;

        if !self.primed {
            self.primed = true;
            self.reader.advance();
        }

        while self.reader.current().is_some_and(char::is_whitespace) && self.reader.advance() {}

        if self.reader.error().is_some() {
            return false;
        }

        let start = self.reader.position();
        let first = match self.reader.current() {
            Some(ch) => ch,
            None => return false,
        };

        let mut text = String::new();
        let kind = if let Some(kind) = TokenKind::from_symbol(first) {
            text.push(first);
            self.reader.advance();
            kind
        } else if first.is_numeric() {
            self.take_while(&mut text, char::is_numeric);
            TokenKind::Number
        } else if is_identifier_char(first) {
            self.take_while(&mut text, is_identifier_char);
            TokenKind::Identifier
        } else {
            if self.stray.is_none() {
                log_debug!("Tokenizer stopped at unrecognized character",
                    "character" => first.escape_debug(),
                    "position" => start
                );
            }
            self.stray = Some(StrayCharacter {
                character: first,
                position: start,
            });
            return false;
        };

        if self.reader.error().is_some() {
            return false;
        }

        let span = Span::new(start, self.reader.position());
        self.current = Some(Lexeme::new(kind, text, span));
        self.lexeme_count += 1;
        true
    }

    fn take_while(&mut self, text: &mut String, accept: fn(char) -> bool) {
        while let Some(ch) = self.reader.current() {
            if !accept(ch) {
                break;
            }
            text.push(ch);
            if !self.reader.advance() {
                break;
            }
        }
    }

    /// The lexeme produced by the last successful [`advance`](Self::advance)
    pub fn current(&self) -> Option<&Lexeme> {
        self.current.as_ref()
    }

    /// Position of the next unconsumed character
    pub fn position(&self) -> Position {
        self.reader.position()
    }

    pub fn stray(&self) -> Option<StrayCharacter> {
        self.stray
    }

    pub fn error(&self) -> Option<&LexicalError> {
        self.reader.error()
    }

    pub fn take_error(&mut self) -> Option<LexicalError> {
        self.reader.take_error()
    }

    /// Number of lexemes produced so far
    pub fn lexeme_count(&self) -> usize {
        self.lexeme_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize_str;
    use std::io::Cursor;

    fn kinds_and_text(lexemes: &[Lexeme]) -> Vec<(TokenKind, &str)> {
        lexemes.iter().map(|l| (l.kind, l.text.as_str())).collect()
    }

    fn offsets(lexemes: &[Lexeme]) -> Vec<(usize, usize)> {
        lexemes
            .iter()
            .map(|l| (l.start().offset, l.end().offset))
            .collect()
    }

    #[test]
    fn test_basic_record() {
        let lexemes = tokenize_str("(((fundamental-mode . ido-find-file) . 8))").unwrap();
        assert_eq!(
            kinds_and_text(&lexemes),
            vec![
                (TokenKind::OpenParen, "("),
                (TokenKind::OpenParen, "("),
                (TokenKind::OpenParen, "("),
                (TokenKind::Identifier, "fundamental-mode"),
                (TokenKind::Dot, "."),
                (TokenKind::Identifier, "ido-find-file"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Dot, "."),
                (TokenKind::Number, "8"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::CloseParen, ")"),
            ]
        );
    }

    #[test]
    fn test_single_close_paren() {
        let lexemes = tokenize_str(")").unwrap();
        assert_eq!(kinds_and_text(&lexemes), vec![(TokenKind::CloseParen, ")")]);
        assert_eq!(offsets(&lexemes), vec![(0, 1)]);
    }

    #[test]
    fn test_letters_form_one_identifier() {
        let lexemes = tokenize_str("Test").unwrap();
        assert_eq!(kinds_and_text(&lexemes), vec![(TokenKind::Identifier, "Test")]);
        assert_eq!(offsets(&lexemes), vec![(0, 4)]);
    }

    #[test]
    fn test_digits_then_letters_split() {
        let lexemes = tokenize_str("12ab").unwrap();
        assert_eq!(
            kinds_and_text(&lexemes),
            vec![(TokenKind::Number, "12"), (TokenKind::Identifier, "ab")]
        );
        assert_eq!(offsets(&lexemes), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_letters_then_digits_stay_one_identifier() {
        let lexemes = tokenize_str("ab12 c++ a/b:c*d&e").unwrap();
        assert_eq!(
            kinds_and_text(&lexemes),
            vec![
                (TokenKind::Identifier, "ab12"),
                (TokenKind::Identifier, "c++"),
                (TokenKind::Identifier, "a/b:c*d&e"),
            ]
        );
    }

    #[test]
    fn test_unclosed_input_with_trailing_space() {
        let lexemes = tokenize_str("(hello  world ").unwrap();
        assert_eq!(
            kinds_and_text(&lexemes),
            vec![
                (TokenKind::OpenParen, "("),
                (TokenKind::Identifier, "hello"),
                (TokenKind::Identifier, "world"),
            ]
        );
        assert_eq!(offsets(&lexemes), vec![(0, 1), (1, 6), (8, 13)]);
    }

    #[test]
    fn test_positions_across_lines() {
        let lexemes = tokenize_str("( hello\n  world ").unwrap();
        let spans: Vec<Span> = lexemes.iter().map(|l| l.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(Position::new(0, 0, 0), Position::new(1, 0, 1)),
                Span::new(Position::new(2, 0, 2), Position::new(7, 0, 7)),
                Span::new(Position::new(10, 1, 2), Position::new(15, 1, 7)),
            ]
        );
    }

    #[test]
    fn test_stray_character_stops_tokenizer() {
        let mut tokenizer = Tokenizer::new(Cursor::new("(a # b)"));
        assert!(tokenizer.advance());
        assert!(tokenizer.advance());
        assert_eq!(tokenizer.current().map(|l| l.text.as_str()), Some("a"));

        assert!(!tokenizer.advance());
        assert!(tokenizer.current().is_none());
        assert!(tokenizer.error().is_none());
        assert_eq!(
            tokenizer.stray(),
            Some(StrayCharacter {
                character: '#',
                position: Position::new(3, 0, 3),
            })
        );

        // Stays stopped.
        assert!(!tokenizer.advance());
        assert_eq!(tokenizer.lexeme_count(), 2);
    }

    #[test]
    fn test_whitespace_only_input() {
        let mut tokenizer = Tokenizer::new(Cursor::new(" \t\r\n "));
        assert!(!tokenizer.advance());
        assert!(tokenizer.stray().is_none());
        assert_eq!(tokenizer.position(), Position::new(5, 1, 1));
    }

    #[test]
    fn test_carriage_return_is_whitespace() {
        let lexemes = tokenize_str("(\r\n)").unwrap();
        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[1].start(), Position::new(3, 1, 0));
    }

    #[test]
    fn test_identifier_char_classes() {
        for ch in ['a', 'Z', 'ß', '7', '-', '+', ':', '*', '&', '/'] {
            assert!(is_identifier_char(ch), "{}", ch);
        }
        for ch in ['(', ')', '.', ' ', '#', '"', ';'] {
            assert!(!is_identifier_char(ch), "{}", ch);
        }
    }
}
