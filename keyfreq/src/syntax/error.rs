//! Errors raised while validating the record grammar
//!
//! Every variant carries the position it refers to; messages start with that
//! position so they can be printed as-is.

use crate::frequency::TotalOverflow;
use crate::lexical::LexicalError;
use crate::logging::{codes, Code};
use crate::tokens::{Lexeme, TokenKind};
use crate::utils::Position;
use std::num::ParseIntError;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("{position} expected {} in {rule} but got '{found}'", .expected.describe())]
    UnexpectedToken {
        rule: &'static str,
        expected: TokenKind,
        found: String,
        position: Position,
    },

    #[error("{position} expected {} in {rule} but reached end of input", .expected.describe())]
    UnexpectedEndOfInput {
        rule: &'static str,
        expected: TokenKind,
        position: Position,
    },

    #[error("{position} expected {} in {rule} but got unrecognized character '{}'", .expected.describe(), .character.escape_debug())]
    UnexpectedCharacter {
        rule: &'static str,
        expected: TokenKind,
        character: char,
        position: Position,
    },

    #[error("{position} can't convert count '{text}' to unsigned integer: {source}")]
    InvalidCount {
        text: String,
        position: Position,
        #[source]
        source: ParseIntError,
    },

    #[error("{position} {source}")]
    CountOverflow {
        position: Position,
        #[source]
        source: TotalOverflow,
    },

    #[error(transparent)]
    Lexical(#[from] LexicalError),
}

impl SyntaxError {
    /// Create unexpected token error pointing at `found`
    pub fn unexpected_token(rule: &'static str, expected: TokenKind, found: &Lexeme) -> Self {
        Self::UnexpectedToken {
            rule,
            expected,
            found: found.text.clone(),
            position: found.start(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::InvalidCount { position, .. }
            | Self::CountOverflow { position, .. } => *position,
            Self::Lexical(error) => error.position(),
        }
    }

    /// Get error code for logging
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::UnexpectedCharacter { .. } => codes::syntax::UNEXPECTED_CHARACTER,
            Self::InvalidCount { .. } => codes::syntax::INVALID_COUNT,
            Self::CountOverflow { .. } => codes::syntax::COUNT_OVERFLOW,
            Self::Lexical(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    #[test]
    fn test_unexpected_token_message() {
        let found = Lexeme::new(
            TokenKind::Identifier,
            "my-function",
            Span::new(Position::new(9, 0, 9), Position::new(20, 0, 20)),
        );
        let error = SyntaxError::unexpected_token("pair", TokenKind::Dot, &found);

        assert_eq!(
            error.to_string(),
            ":0:9 (9) expected symbol '.' in pair but got 'my-function'"
        );
        assert_eq!(error.position(), Position::new(9, 0, 9));
        assert_eq!(error.error_code(), codes::syntax::UNEXPECTED_TOKEN);
    }

    #[test]
    fn test_lexical_error_keeps_its_position() {
        let lexical = LexicalError::Stream {
            position: Position::new(4, 1, 0),
            message: "broken pipe".to_string(),
        };
        let error = SyntaxError::from(lexical);
        assert_eq!(error.position(), Position::new(4, 1, 0));
        assert_eq!(error.error_code(), codes::lexical::STREAM_READ_FAILED);
        assert!(error.to_string().contains("broken pipe"));
    }
}
