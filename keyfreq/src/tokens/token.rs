//! Lexical units of keyfreq files
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of lexical categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    OpenParen,  // (
    CloseParen, // )
    Dot,        // .
    Identifier,
    Number,
}

impl TokenKind {
    /// Stable upper-case name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::OpenParen => "OPAREN",
            TokenKind::CloseParen => "CPAREN",
            TokenKind::Dot => "DOT",
            TokenKind::Identifier => "IDENT",
            TokenKind::Number => "NUMBER",
        }
    }

    /// How the kind reads in "expected ..." messages
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::OpenParen => "symbol '('",
            TokenKind::CloseParen => "symbol ')'",
            TokenKind::Dot => "symbol '.'",
            TokenKind::Identifier => "IDENT",
            TokenKind::Number => "number",
        }
    }

    /// Kind of a single-character token, if `ch` is one
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            '.' => Some(TokenKind::Dot),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified, positioned run of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Lexeme {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Position before the first character of the lexeme
    pub fn start(&self) -> Position {
        self.span.start
    }

    /// Position after the last character of the lexeme
    pub fn end(&self) -> Position {
        self.span.end
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.kind, self.text)
    }
}
