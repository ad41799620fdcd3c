//! A KDL 2.0 document language parser, schema binder, and canonical emitter.
//!
//! This crate is a thin facade over the workspace's phase crates:
//! [`kdl_lex`] tokenizes, [`kdl_parse`] builds the [`Document`] tree and
//! re-emits it, and [`kdl_schema`] binds nodes against hand-written
//! descriptors. Most callers only need what's re-exported here.
//!
//! ```
//! let doc = kdl::parse("greeting \"hello\" times=3\n", None).unwrap();
//! assert_eq!(doc.nodes[0].name.as_str(), "greeting");
//! ```

pub mod error;

pub use error::{Error, Result};

pub use kdl_parse::{parse, Document, Integer, Node, ParseError, ParseErrorKind, TransformError, TypedValue, TypeTransform, Value};
pub use kdl_schema::{BindError, BindErrorKind, Binder, BoundNode, NodeClass, SchemaBuilder, SchemaDescriptor, SlotDescriptor, SlotKind};
