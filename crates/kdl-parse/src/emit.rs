//! Canonical re-serialization of a [`Document`] back to KDL text.
//!
//! The emitter always uses the ordinary (non-raw, non-block) string form and
//! bare identifiers wherever the content allows it, so two documents that
//! parse to the same [`Document`] emit to the same text — `emit` is not
//! trying to preserve the original formatting, only the original meaning.

use kdl_lex::unicode;

use crate::document::Document;
use crate::node::Node;
use crate::value::{Integer, TypedValue, Value};

const INDENT: &str = "    ";

/// Emits `document` as canonical KDL text.
pub fn emit_document(document: &Document) -> String {
    let mut out = String::new();
    for node in &document.nodes {
        emit_node(node, 0, &mut out);
    }
    out
}

fn emit_node(node: &Node, depth: usize, out: &mut String) {
    push_indent(out, depth);

    if let Some(type_annotation) = node.type_annotation {
        push_annotation(out, type_annotation.as_str());
    }
    out.push_str(&emit_identifier(node.name.as_str()));

    for arg in &node.args {
        out.push(' ');
        emit_typed_value(arg, out);
    }

    for (key, value) in &node.props {
        out.push(' ');
        out.push_str(&emit_identifier(key.as_str()));
        out.push('=');
        emit_typed_value(value, out);
    }

    if node.children.is_empty() {
        out.push('\n');
        return;
    }

    out.push_str(" {\n");
    for child in &node.children {
        emit_node(child, depth + 1, out);
    }
    push_indent(out, depth);
    out.push_str("}\n");
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_annotation(out: &mut String, name: &str) {
    out.push('(');
    out.push_str(&emit_identifier(name));
    out.push(')');
}

fn emit_typed_value(value: &TypedValue, out: &mut String) {
    if let Some(type_annotation) = value.type_annotation {
        push_annotation(out, type_annotation.as_str());
    }
    out.push_str(&emit_value(&value.value));
}

fn emit_value(value: &Value) -> String {
    match value {
        Value::Integer(Integer::Small(n)) => n.to_string(),
        Value::Integer(Integer::Big(n)) => n.to_string(),
        Value::Float(f) => emit_float(*f),
        Value::String(s) => emit_quoted_string(s),
        Value::Bool(true) => "#true".to_string(),
        Value::Bool(false) => "#false".to_string(),
        Value::Null => "#null".to_string(),
    }
}

fn emit_float(f: f64) -> String {
    if f.is_nan() {
        return "#nan".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_negative() { "#-inf".to_string() } else { "#inf".to_string() };
    }
    let text = format!("{}", f);
    if text.contains('.') || text.contains('e') || text.contains('E') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Emits `name` as a bare identifier when it's syntactically valid as one,
/// else as a quoted string.
fn emit_identifier(name: &str) -> String {
    if can_be_bare_identifier(name) {
        name.to_string()
    } else {
        emit_quoted_string(name)
    }
}

fn can_be_bare_identifier(s: &str) -> bool {
    if s.is_empty() || unicode::is_reserved_word(s) {
        return false;
    }

    let mut chars = s.chars();
    let first = chars.next().unwrap();
    if !unicode::is_ident_start(first) {
        return false;
    }
    if matches!(first, '+' | '-') {
        if let Some(second) = chars.next() {
            if second.is_ascii_digit() {
                return false;
            }
        }
    }

    s.chars().all(unicode::is_ident_continue)
}

fn emit_quoted_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn emits_bare_node_name() {
        let doc = parse_document("building\n").unwrap();
        assert_eq!(emit_document(&doc), "building\n");
    }

    #[test]
    fn emits_quoted_name_when_not_bare() {
        let doc = parse_document("\"has space\" 1\n").unwrap();
        assert_eq!(emit_document(&doc), "\"has space\" 1\n");
    }

    #[test]
    fn emits_float_with_decimal_point() {
        let doc = parse_document("node 5.0\n").unwrap();
        assert_eq!(emit_document(&doc), "node 5.0\n");
    }

    #[test]
    fn emits_children_indented() {
        let doc = parse_document("a {\n  b 1\n}\n").unwrap();
        assert_eq!(emit_document(&doc), "a {\n    b 1\n}\n");
    }

    #[test]
    fn round_trip_preserves_meaning() {
        let source = "building name=\"Tower\" floors=42 {\n    address street=\"Main St\"\n}\n";
        let first = parse_document(source).unwrap();
        let emitted = emit_document(&first);
        let second = parse_document(&emitted).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn keyword_values_round_trip() {
        let source = "node #true #null #nan\n";
        let first = parse_document(source).unwrap();
        let second = parse_document(&emit_document(&first)).unwrap();
        assert_eq!(first.nodes[0].args[0].value, second.nodes[0].args[0].value);
        assert_eq!(first.nodes[0].args[1].value, second.nodes[0].args[1].value);
        assert!(matches!(second.nodes[0].args[2].value, Value::Float(f) if f.is_nan()));
    }
}
