//! Hand-written lexer for the KDL 2.0 document language.
//!
//! This crate turns a source string into a stream of [`Token`]s. It performs
//! no parsing of its own (no node/value tree, no schema awareness) — it only
//! classifies characters and assembles literals, leaving grammar-level
//! decisions (is this an argument or a property, does `=` start a property)
//! to `kdl_parse`.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use token::{Keyword, NumberBase, Token};
