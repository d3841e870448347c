use crate::logging::{codes, Code};
use crate::utils::Position;

/// Failures of the character stream underneath the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("{position} error while reading from stream: {message}")]
    Stream { position: Position, message: String },
}

impl LexicalError {
    pub fn stream(position: Position, source: &std::io::Error) -> Self {
        Self::Stream {
            position,
            message: source.to_string(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexicalError::Stream { position, .. } => *position,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            LexicalError::Stream { .. } => codes::lexical::STREAM_READ_FAILED,
        }
    }
}
