//! The [`NodeClass`] trait: a Rust type that knows how to describe and bind
//! itself against a KDL node.

use kdl_parse::{Document, Node};

use crate::binder::{Binder, BoundNode};
use crate::cache::cached_descriptor;
use crate::error::BindResult;
use crate::schema::SchemaDescriptor;

/// A Rust type bound to a KDL node shape.
///
/// Implementations are written by hand: [`NodeClass::describe`] declares the
/// expected slots with the builder in [`crate::schema`], and
/// [`NodeClass::bind`] reads the validated [`BoundNode`] back into `Self`.
/// There is no derive for this — the mapping from node shape to Rust fields
/// is exactly the kind of thing worth spelling out explicitly.
pub trait NodeClass: Sized + 'static {
    fn describe() -> SchemaDescriptor;

    fn bind(bound: &BoundNode) -> BindResult<Self>;

    /// Binds a single node, using the cached descriptor for `Self`.
    fn parse_node(node: &Node) -> BindResult<Self> {
        let descriptor = cached_descriptor::<Self>();
        let bound = Binder::bind(node, &descriptor)?;
        Self::bind(&bound)
    }

    /// Binds every top-level node in `document`.
    fn parse_document(document: &Document) -> BindResult<Vec<Self>> {
        document.nodes.iter().map(Self::parse_node).collect()
    }
}
