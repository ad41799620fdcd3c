//! Parser and in-memory document model for the KDL 2.0 document language.
//!
//! This crate turns the token stream produced by
//! [`kdl_lex`](../kdl_lex/index.html) into a [`Document`] tree: nodes with
//! positional arguments, properties (in last-occurrence order), optional
//! type annotations, and optional children. Numeric literal decoding
//! (including overflow promotion to an arbitrary-precision integer) lives
//! in [`decoder`]; type/node transform application lives in [`transform`];
//! canonical re-serialization lives in [`emit`].

pub mod decoder;
pub mod document;
pub mod emit;
pub mod error;
pub mod node;
pub mod parser;
pub mod transform;
pub mod value;

pub use document::Document;
pub use error::{ParseError, ParseErrorKind, ParseResult, TransformError};
pub use node::Node;
pub use parser::parse_document;
pub use transform::TypeTransform;
pub use value::{Integer, TypedValue, Value};

/// Parses `source` into a [`Document`], applying `transform` (if given) to
/// every node before returning it.
///
/// `transform` bundles both the type-annotation and node-name callable
/// maps: register callables on it with
/// [`TypeTransform::register_node`]/[`TypeTransform::register_type`] before
/// passing it here.
pub fn parse(source: &str, transform: Option<&TypeTransform>) -> ParseResult<Document> {
    let mut document = parse_document(source)?;
    if let Some(transform) = transform {
        transform.apply_document(&mut document)?;
    }
    Ok(document)
}
