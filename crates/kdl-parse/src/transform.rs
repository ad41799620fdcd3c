//! Applies caller-registered transform callables over a parsed [`Document`].
//!
//! Two maps of callables can be registered: one keyed by node name, applied
//! to the whole node, and one keyed by a *value's own* type annotation,
//! applied to that value in place. `node_map` runs first; `type_map` is then
//! applied to the (possibly node_map-modified) node's annotated arguments and
//! properties — the two are not mutually exclusive. A callable may reject a
//! value; that surfaces as a [`TransformError`] carrying the span of the
//! value it rejected.

use indexmap::IndexMap;
use kdl_util::Symbol;

use crate::document::Document;
use crate::error::TransformError;
use crate::node::Node;
use crate::value::Value;

type NodeCallable = Box<dyn Fn(&mut Node) -> Result<(), String> + Send + Sync>;
type TypeCallable = Box<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// A registry of node-name and type-annotation callables, applied
/// recursively over a document's node tree.
#[derive(Default)]
pub struct TypeTransform {
    node_map: IndexMap<Symbol, NodeCallable>,
    type_map: IndexMap<Symbol, TypeCallable>,
}

impl TypeTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callable invoked on every node named `name`, given the
    /// whole node to mutate in place.
    pub fn register_node(
        &mut self,
        name: &str,
        f: impl Fn(&mut Node) -> Result<(), String> + Send + Sync + 'static,
    ) -> &mut Self {
        self.node_map.insert(Symbol::intern(name), Box::new(f));
        self
    }

    /// Registers a callable invoked on every value annotated `(name)`,
    /// returning the replacement value.
    pub fn register_type(
        &mut self,
        name: &str,
        f: impl Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> &mut Self {
        self.type_map.insert(Symbol::intern(name), Box::new(f));
        self
    }

    /// Applies registered callables to every node in `document`, depth-first.
    pub fn apply_document(&self, document: &mut Document) -> Result<(), TransformError> {
        for node in &mut document.nodes {
            self.apply_node(node)?;
        }
        Ok(())
    }

    /// Applies registered callables to `node` and its descendants: the
    /// node-name callable first (if any), then the type-annotation callable
    /// for each of the node's annotated arguments and properties.
    pub fn apply_node(&self, node: &mut Node) -> Result<(), TransformError> {
        if let Some(f) = self.node_map.get(&node.name) {
            f(node).map_err(|message| TransformError::new(message, node.span))?;
        }

        for arg in &mut node.args {
            if let Some(type_name) = arg.type_annotation {
                if let Some(f) = self.type_map.get(&type_name) {
                    arg.value = f(&arg.value).map_err(|message| TransformError::new(message, arg.span))?;
                }
            }
        }
        for prop in node.props.values_mut() {
            if let Some(type_name) = prop.type_annotation {
                if let Some(f) = self.type_map.get(&type_name) {
                    prop.value = f(&prop.value).map_err(|message| TransformError::new(message, prop.span))?;
                }
            }
        }

        for child in &mut node.children {
            self.apply_node(child)?;
        }

        Ok(())
    }
}
