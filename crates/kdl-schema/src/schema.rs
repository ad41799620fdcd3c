//! Explicit, hand-written schema descriptors for node classes.
//!
//! A [`SchemaDescriptor`] lists the argument/property/child slots a node
//! class expects. It is built with [`SchemaDescriptor::builder`] rather than
//! derived, so the mapping from a node's shape to a Rust type is always
//! visible at the call site.

/// One expected slot in a node's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDescriptor {
    pub name: &'static str,
    pub kind: SlotKind,
    pub required: bool,
    /// When set, the binder checks the slot's value against
    /// [`kdl_parse::Value::type_name`] and raises `TypeMismatch` on a
    /// mismatch. Left `None` to accept any value kind.
    pub expected_type: Option<&'static str>,
}

/// What part of a node a slot reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A positional argument at a fixed index.
    Argument(usize),
    /// A named property.
    Property,
    /// A single child node, matched by name.
    Child,
    /// All children matching a name, collected as a group.
    Children,
    /// Catch-all for positional arguments beyond the declared ones.
    OtherArguments,
    /// Catch-all for properties not named by another slot.
    OtherProperties,
    /// Catch-all for children not named by another slot.
    OtherChildren,
}

/// The full expected shape of a node class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDescriptor {
    pub node_name: Option<&'static str>,
    pub slots: Vec<SlotDescriptor>,
}

impl SchemaDescriptor {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn slot(&self, name: &str) -> Option<&SlotDescriptor> {
        self.slots.iter().find(|s| s.name == name)
    }

    pub fn has_other_arguments(&self) -> bool {
        self.slots.iter().any(|s| s.kind == SlotKind::OtherArguments)
    }

    pub fn has_other_properties(&self) -> bool {
        self.slots.iter().any(|s| s.kind == SlotKind::OtherProperties)
    }

    pub fn has_other_children(&self) -> bool {
        self.slots.iter().any(|s| s.kind == SlotKind::OtherChildren)
    }

    pub fn declared_argument_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.kind, SlotKind::Argument(_)))
            .count()
    }
}

/// Builder for [`SchemaDescriptor`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    node_name: Option<&'static str>,
    slots: Vec<SlotDescriptor>,
    next_argument: usize,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_name(mut self, name: &'static str) -> Self {
        self.node_name = Some(name);
        self
    }

    /// Declares the next positional argument slot, in call order.
    pub fn argument(self, name: &'static str, required: bool) -> Self {
        self.argument_typed(name, required, None)
    }

    /// Like [`Self::argument`], additionally requiring the value to be of
    /// `expected_type` (as named by [`kdl_parse::Value::type_name`]).
    pub fn argument_typed(mut self, name: &'static str, required: bool, expected_type: Option<&'static str>) -> Self {
        let index = self.next_argument;
        self.next_argument += 1;
        self.slots.push(SlotDescriptor {
            name,
            kind: SlotKind::Argument(index),
            required,
            expected_type,
        });
        self
    }

    pub fn property(self, name: &'static str, required: bool) -> Self {
        self.property_typed(name, required, None)
    }

    pub fn property_typed(mut self, name: &'static str, required: bool, expected_type: Option<&'static str>) -> Self {
        self.slots.push(SlotDescriptor {
            name,
            kind: SlotKind::Property,
            required,
            expected_type,
        });
        self
    }

    pub fn child(mut self, name: &'static str, required: bool) -> Self {
        self.slots.push(SlotDescriptor {
            name,
            kind: SlotKind::Child,
            required,
            expected_type: None,
        });
        self
    }

    pub fn children(mut self, name: &'static str) -> Self {
        self.slots.push(SlotDescriptor {
            name,
            kind: SlotKind::Children,
            required: false,
            expected_type: None,
        });
        self
    }

    pub fn other_arguments(mut self) -> Self {
        self.slots.push(SlotDescriptor {
            name: "*arguments",
            kind: SlotKind::OtherArguments,
            required: false,
            expected_type: None,
        });
        self
    }

    pub fn other_properties(mut self) -> Self {
        self.slots.push(SlotDescriptor {
            name: "*properties",
            kind: SlotKind::OtherProperties,
            required: false,
            expected_type: None,
        });
        self
    }

    pub fn other_children(mut self) -> Self {
        self.slots.push(SlotDescriptor {
            name: "*children",
            kind: SlotKind::OtherChildren,
            required: false,
            expected_type: None,
        });
        self
    }

    pub fn build(self) -> SchemaDescriptor {
        SchemaDescriptor {
            node_name: self.node_name,
            slots: self.slots,
        }
    }
}
