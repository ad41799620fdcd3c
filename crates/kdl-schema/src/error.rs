//! Errors raised while binding a parsed node against a [`crate::schema::SchemaDescriptor`].

use kdl_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct BindError {
    pub kind: BindErrorKind,
    pub span: Span,
}

impl BindError {
    pub fn new(kind: BindErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BindErrorKind {
    #[error("no node class registered for node '{0}'")]
    UnknownNode(String),

    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    #[error("unexpected extra argument at position {0}")]
    ExtraArgument(usize),

    #[error("missing required property '{0}'")]
    MissingProperty(String),

    #[error("unexpected property '{0}'")]
    ExtraProperty(String),

    #[error("missing required child '{0}'")]
    MissingChild(String),

    #[error("child '{0}' may only appear once")]
    DuplicateChild(String),

    #[error("unexpected child '{0}'")]
    UnexpectedChild(String),

    #[error("slot '{slot}' expected a {expected} value but found a {found} value")]
    TypeMismatch {
        slot: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type BindResult<T> = Result<T, BindError>;
