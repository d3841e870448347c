//! Shared location types used by the reader, tokenizer and parser.

pub mod span;

pub use span::{Position, Span};
