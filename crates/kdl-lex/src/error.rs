//! Lexical errors.

use kdl_util::Span;
use thiserror::Error;

/// A lexical error, always fatal: the lexer stops at the first one rather
/// than trying to recover and keep scanning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("invalid escape sequence: \\{0}")]
    InvalidEscape(char),
    #[error("invalid hex scalar escape: {0}")]
    InvalidHexScalar(String),
    #[error("disallowed character: U+{0:04X}")]
    DisallowedChar(u32),
    #[error("malformed number literal: {0}")]
    MalformedNumber(String),
    #[error("block string line has indentation that does not match the closing prefix")]
    BadBlockStringIndent,
    #[error("'{0}' is a reserved word and must be quoted to use as an identifier")]
    ReservedIdentifier(String),
}

pub type LexResult<T> = Result<T, LexError>;
