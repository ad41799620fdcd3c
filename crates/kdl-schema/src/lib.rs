//! Schema reflection and binding on top of [`kdl_parse::Document`].
//!
//! A [`SchemaDescriptor`](schema::SchemaDescriptor) declares the argument,
//! property, and child slots a node class expects. [`binder::Binder`]
//! validates a parsed node against that shape, and
//! [`node_class::NodeClass`] ties the two together so a Rust type can bind
//! itself straight out of a document.

pub mod binder;
pub mod cache;
pub mod coerce;
pub mod error;
pub mod node_class;
pub mod schema;

pub use binder::{Binder, BoundNode};
pub use cache::cached_descriptor;
pub use error::{BindError, BindErrorKind, BindResult};
pub use node_class::NodeClass;
pub use schema::{SchemaBuilder, SchemaDescriptor, SlotDescriptor, SlotKind};
