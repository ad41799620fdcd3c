//! Top-down slot filling: matching a parsed node against a [`SchemaDescriptor`].

use kdl_parse::{Node, TypedValue};

use crate::error::{BindError, BindErrorKind, BindResult};
use crate::schema::{SchemaDescriptor, SlotKind};

/// A node that has been validated against a [`SchemaDescriptor`]. Field
/// accessors return borrowed values from the underlying node; a node class's
/// hand-written `bind` conversion reads through this rather than the raw
/// [`Node`] so every required slot it touches is already known to exist.
pub struct BoundNode<'a> {
    node: &'a Node,
    descriptor: &'a SchemaDescriptor,
}

impl<'a> BoundNode<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn argument(&self, index: usize) -> Option<&'a TypedValue> {
        self.node.arg(index)
    }

    pub fn property(&self, name: &str) -> Option<&'a TypedValue> {
        self.node.prop(name)
    }

    pub fn child(&self, name: &str) -> Option<&'a Node> {
        self.node.children_named(name).next()
    }

    pub fn children(&self, name: &str) -> Vec<&'a Node> {
        self.node.children_named(name).collect()
    }

    /// Arguments beyond the declared positional slots.
    pub fn other_arguments(&self) -> &'a [TypedValue] {
        let declared = self.descriptor.declared_argument_count();
        if declared >= self.node.args.len() {
            &[]
        } else {
            &self.node.args[declared..]
        }
    }

    /// Properties not claimed by a named `Property` slot.
    pub fn other_properties(&self) -> Vec<(&'a str, &'a TypedValue)> {
        self.node
            .props
            .iter()
            .filter(|(key, _)| self.descriptor.slot(key.as_str()).is_none())
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    /// Children not claimed by a `Child` or `Children` slot.
    pub fn other_children(&self) -> Vec<&'a Node> {
        self.node
            .children
            .iter()
            .filter(|child| {
                !self
                    .descriptor
                    .slots
                    .iter()
                    .any(|s| matches!(s.kind, SlotKind::Child | SlotKind::Children) && s.name == child.name.as_str())
            })
            .collect()
    }
}

/// Validates a [`Node`] against a [`SchemaDescriptor`], producing a
/// [`BoundNode`] on success.
pub struct Binder;

impl Binder {
    pub fn bind<'a>(node: &'a Node, descriptor: &'a SchemaDescriptor) -> BindResult<BoundNode<'a>> {
        if let Some(expected_name) = descriptor.node_name {
            if !node.name.eq_str(expected_name) {
                return Err(BindError::new(
                    BindErrorKind::UnknownNode(node.name.as_str().to_string()),
                    node.span,
                ));
            }
        }

        for slot in &descriptor.slots {
            match slot.kind {
                SlotKind::Argument(index) => match node.args.get(index) {
                    Some(value) => check_type(slot.name, slot.expected_type, value)?,
                    None if slot.required => {
                        return Err(BindError::new(
                            BindErrorKind::MissingArgument(slot.name.to_string()),
                            node.span,
                        ))
                    }
                    None => {}
                },
                SlotKind::Property => match node.prop(slot.name) {
                    Some(value) => check_type(slot.name, slot.expected_type, value)?,
                    None if slot.required => {
                        return Err(BindError::new(
                            BindErrorKind::MissingProperty(slot.name.to_string()),
                            node.span,
                        ))
                    }
                    None => {}
                },
                SlotKind::Child => {
                    let matches: Vec<&Node> = node.children_named(slot.name).collect();
                    match matches.len() {
                        0 if slot.required => {
                            return Err(BindError::new(
                                BindErrorKind::MissingChild(slot.name.to_string()),
                                node.span,
                            ))
                        }
                        0 => {}
                        1 => {}
                        _ => {
                            return Err(BindError::new(
                                BindErrorKind::DuplicateChild(slot.name.to_string()),
                                matches[1].span,
                            ))
                        }
                    }
                }
                SlotKind::Children | SlotKind::OtherArguments | SlotKind::OtherProperties | SlotKind::OtherChildren => {}
            }
        }

        if !descriptor.has_other_arguments() {
            let declared = descriptor.declared_argument_count();
            if node.args.len() > declared {
                return Err(BindError::new(BindErrorKind::ExtraArgument(declared), node.span));
            }
        }

        if !descriptor.has_other_properties() {
            for key in node.props.keys() {
                if descriptor.slot(key.as_str()).is_none() {
                    return Err(BindError::new(
                        BindErrorKind::ExtraProperty(key.as_str().to_string()),
                        node.span,
                    ));
                }
            }
        }

        if !descriptor.has_other_children() {
            for child in &node.children {
                let claimed = descriptor
                    .slots
                    .iter()
                    .any(|s| matches!(s.kind, SlotKind::Child | SlotKind::Children) && s.name == child.name.as_str());
                if !claimed {
                    return Err(BindError::new(
                        BindErrorKind::UnexpectedChild(child.name.as_str().to_string()),
                        child.span,
                    ));
                }
            }
        }

        Ok(BoundNode { node, descriptor })
    }
}

/// Checks `value` against `expected`, allowing the one documented widening:
/// an `integer` value satisfies a `float`-typed slot (an exact match always
/// does; nothing else does).
fn check_type(slot_name: &str, expected: Option<&'static str>, value: &TypedValue) -> BindResult<()> {
    if let Some(expected) = expected {
        let found = value.value.type_name();
        let widens = expected == "float" && found == "integer";
        if found != expected && !widens {
            return Err(BindError::new(
                BindErrorKind::TypeMismatch {
                    slot: slot_name.to_string(),
                    expected,
                    found,
                },
                value.span,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdl_parse::parse_document as parse;

    #[test]
    fn missing_required_argument_errors() {
        let document = parse("address city=\"Springfield\"\n").unwrap();
        let descriptor = SchemaDescriptor::builder().node_name("address").argument("street", true).build();

        let err = Binder::bind(&document.nodes[0], &descriptor).unwrap_err();
        assert!(matches!(err.kind, BindErrorKind::MissingArgument(ref name) if name == "street"));
    }

    #[test]
    fn unexpected_child_errors_without_catch_all() {
        let document = parse("building {\n    shed height=2\n}\n").unwrap();
        let descriptor = SchemaDescriptor::builder().node_name("building").build();

        let err = Binder::bind(&document.nodes[0], &descriptor).unwrap_err();
        assert!(matches!(err.kind, BindErrorKind::UnexpectedChild(ref name) if name == "shed"));
    }

    #[test]
    fn other_children_catch_all_suppresses_unexpected_child() {
        let document = parse("building {\n    shed height=2\n}\n").unwrap();
        let descriptor = SchemaDescriptor::builder().node_name("building").other_children().build();

        let bound = Binder::bind(&document.nodes[0], &descriptor).unwrap();
        assert_eq!(bound.other_children().len(), 1);
    }

    #[test]
    fn duplicate_child_errors_for_singular_slot() {
        let document = parse("person {\n    address street=\"A\"\n    address street=\"B\"\n}\n").unwrap();
        let descriptor = SchemaDescriptor::builder().node_name("person").child("address", true).build();

        let err = Binder::bind(&document.nodes[0], &descriptor).unwrap_err();
        assert!(matches!(err.kind, BindErrorKind::DuplicateChild(ref name) if name == "address"));
    }

    #[test]
    fn type_mismatch_on_wrong_argument_kind() {
        let document = parse("address street=100\n").unwrap();
        let descriptor = SchemaDescriptor::builder()
            .node_name("address")
            .property_typed("street", true, Some("string"))
            .build();

        let err = Binder::bind(&document.nodes[0], &descriptor).unwrap_err();
        assert!(matches!(err.kind, BindErrorKind::TypeMismatch { expected: "string", found: "integer", .. }));
    }

    #[test]
    fn integer_widens_to_a_float_typed_slot() {
        let document = parse("measurement distance=10\n").unwrap();
        let descriptor = SchemaDescriptor::builder()
            .node_name("measurement")
            .property_typed("distance", true, Some("float"))
            .build();

        assert!(Binder::bind(&document.nodes[0], &descriptor).is_ok());
    }
}
