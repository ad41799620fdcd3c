//! Parse and transform errors.

use kdl_lex::LexError;
use kdl_util::Span;
use thiserror::Error;

/// A parse error, always fatal: the parser stops at the first one rather
/// than trying to recover and keep producing nodes.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid property key: {0}")]
    BadPropertyKey(String),
    #[error("duplicate bare identifier used as a keyword literal: {0}")]
    DuplicateBareIdentifierKeyword(String),
    #[error("slashdash has no following node, argument, property, or children block to suppress")]
    DanglingSlashdash,
    #[error("path segment '{0}' matched no nodes")]
    NotFound(String),
    #[error("path segment '{0}' matched more than one node")]
    Ambiguous(String),
    #[error(transparent)]
    Lex(LexError),
    #[error(transparent)]
    Transform(TransformError),
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError::new(ParseErrorKind::Lex(err), span)
    }
}

impl From<TransformError> for ParseError {
    fn from(err: TransformError) -> Self {
        let span = err.span;
        ParseError::new(ParseErrorKind::Transform(err), span)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// An error raised while applying a [`crate::transform::TypeTransform`] —
/// either a callable returned by the caller failing, or a value shape the
/// callable did not expect.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct TransformError {
    pub message: String,
    pub span: Span,
}

impl TransformError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
