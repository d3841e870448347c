pub mod token;

pub use token::{Lexeme, TokenKind};
