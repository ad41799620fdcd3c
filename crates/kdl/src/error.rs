//! The aggregate error type returned by this crate's top-level operations.

use thiserror::Error;

/// Any error this crate's public operations can return.
///
/// Each variant wraps the corresponding phase's own error type unchanged —
/// this just saves call sites from matching on which stage failed before
/// they can use `?`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] kdl_lex::LexError),

    #[error(transparent)]
    Parse(#[from] kdl_parse::ParseError),

    #[error(transparent)]
    Transform(#[from] kdl_parse::TransformError),

    #[error(transparent)]
    Bind(#[from] kdl_schema::BindError),
}

pub type Result<T> = std::result::Result<T, Error>;
