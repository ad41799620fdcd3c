//! The `Node` type: a name, positional arguments, properties, and children.

use indexmap::IndexMap;
use kdl_util::{Span, Symbol};

use crate::value::TypedValue;

/// A single KDL node: `name arg1 arg2 key=val {{ children }}`.
///
/// Properties are stored in an [`IndexMap`] so that iteration order matches
/// *insertion* order — but a property set more than once is moved to the
/// position of its *last* occurrence, matching KDL's "last value wins, in
/// last-seen position" semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: Symbol,
    pub type_annotation: Option<Symbol>,
    pub args: Vec<TypedValue>,
    pub props: IndexMap<Symbol, TypedValue>,
    pub children: Vec<Node>,
    pub span: Span,
}

impl Node {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self {
            name,
            type_annotation: None,
            args: Vec::new(),
            props: IndexMap::new(),
            children: Vec::new(),
            span,
        }
    }

    /// Inserts or overwrites a property. If `key` was already present, its
    /// entry is removed and reinserted at the end so iteration order tracks
    /// the last occurrence rather than the first.
    pub fn set_prop(&mut self, key: Symbol, value: TypedValue) {
        self.props.shift_remove(&key);
        self.props.insert(key, value);
    }

    pub fn prop(&self, key: &str) -> Option<&TypedValue> {
        self.props.iter().find(|(k, _)| k.eq_str(key)).map(|(_, v)| v)
    }

    pub fn arg(&self, index: usize) -> Option<&TypedValue> {
        self.args.get(index)
    }

    /// Children whose name matches `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |n| n.name.eq_str(name))
    }
}
