//! End-to-end binder test: a small building/address/person node hierarchy.

use kdl_parse::parse_document as parse;
use kdl_schema::binder::BoundNode;
use kdl_schema::coerce::{coerce_i64, coerce_str};
use kdl_schema::error::{BindErrorKind, BindResult};
use kdl_schema::node_class::NodeClass;
use kdl_schema::schema::SchemaDescriptor;

#[derive(Debug, PartialEq)]
struct Address {
    street: String,
    number: Option<i64>,
}

impl NodeClass for Address {
    fn describe() -> SchemaDescriptor {
        SchemaDescriptor::builder()
            .node_name("address")
            .argument("street", true)
            .property("number", false)
            .build()
    }

    fn bind(bound: &BoundNode) -> BindResult<Self> {
        let street = coerce_str(&bound.argument(0).unwrap().value).unwrap().to_string();
        let number = bound.property("number").and_then(|v| coerce_i64(&v.value));
        Ok(Address { street, number })
    }
}

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    age: i64,
}

impl NodeClass for Person {
    fn describe() -> SchemaDescriptor {
        SchemaDescriptor::builder()
            .node_name("person")
            .property("name", true)
            .property("age", true)
            .other_children()
            .build()
    }

    fn bind(bound: &BoundNode) -> BindResult<Self> {
        let name = coerce_str(&bound.property("name").unwrap().value).unwrap().to_string();
        let age = coerce_i64(&bound.property("age").unwrap().value).unwrap();
        Ok(Person { name, age })
    }
}

#[derive(Debug, PartialEq)]
struct Building {
    name: String,
    addresses: Vec<Address>,
    people: Vec<Person>,
}

impl NodeClass for Building {
    fn describe() -> SchemaDescriptor {
        SchemaDescriptor::builder()
            .node_name("building")
            .property("name", true)
            .children("address")
            .children("person")
            .build()
    }

    fn bind(bound: &BoundNode) -> BindResult<Self> {
        let name = coerce_str(&bound.property("name").unwrap().value).unwrap().to_string();
        let addresses = bound
            .children("address")
            .into_iter()
            .map(Address::parse_node)
            .collect::<BindResult<Vec<_>>>()?;
        let people = bound
            .children("person")
            .into_iter()
            .map(Person::parse_node)
            .collect::<BindResult<Vec<_>>>()?;
        Ok(Building { name, addresses, people })
    }
}

#[test]
fn binds_full_building() {
    let source = r#"
        building name="Tower" {
            address street="Main St" number=1
            person name="Alice" age=30
        }
    "#;
    let document = parse(source).unwrap();
    let building = Building::parse_node(&document.nodes[0]).unwrap();

    assert_eq!(building.name, "Tower");
    assert_eq!(building.addresses.len(), 1);
    assert_eq!(building.addresses[0].street, "Main St");
    assert_eq!(building.addresses[0].number, Some(1));
    assert_eq!(building.people[0].name, "Alice");
    assert_eq!(building.people[0].age, 30);
}

#[test]
fn missing_required_argument_on_address_is_reported() {
    let source = "address number=1\n";
    let document = parse(source).unwrap();
    let err = Address::parse_node(&document.nodes[0]).unwrap_err();
    assert!(matches!(err.kind, BindErrorKind::MissingArgument(ref name) if name == "street"));
}

#[test]
fn unknown_child_under_person_is_allowed_by_catch_all() {
    let source = r#"
        person name="Bob" age=25 {
            email "bob@example.com"
        }
    "#;
    let document = parse(source).unwrap();
    let person = Person::parse_node(&document.nodes[0]).unwrap();
    assert_eq!(person.name, "Bob");
}

#[test]
fn unknown_child_under_building_without_catch_all_errors() {
    let source = r#"
        building name="Tower" {
            shed height=2
        }
    "#;
    let document = parse(source).unwrap();
    let err = Building::parse_node(&document.nodes[0]).unwrap_err();
    assert!(matches!(err.kind, BindErrorKind::UnexpectedChild(ref name) if name == "shed"));
}

#[test]
fn document_level_binding_collects_every_top_level_node() {
    let source = "person name=\"Carol\" age=40\nperson name=\"Dave\" age=41\n";
    let document = parse(source).unwrap();
    let people = Person::parse_document(&document).unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name, "Carol");
    assert_eq!(people[1].name, "Dave");
}
