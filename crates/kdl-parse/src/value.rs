//! The KDL value taxonomy: integers (with overflow promotion), floats,
//! strings, booleans, and null, each optionally carrying a type annotation.

use kdl_util::{Span, Symbol};
use num_bigint::BigInt;

/// A KDL integer. Literals that overflow `i128` are promoted to an
/// arbitrary-precision [`BigInt`] rather than rejected — see
/// `kdl_parse::decoder` for where that promotion happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Integer {
    Small(i128),
    Big(BigInt),
}

impl Integer {
    /// Lossy conversion used by the schema binder's `Integer -> Float`
    /// coercion rule.
    pub fn to_f64(&self) -> f64 {
        match self {
            Integer::Small(v) => *v as f64,
            Integer::Big(v) => v.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integer::Small(v) => write!(f, "{}", v),
            Integer::Big(v) => write!(f, "{}", v),
        }
    }
}

/// The value carried by a single KDL argument or property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(Integer),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(Integer::Small(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A value together with its optional `(type)` annotation and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub type_annotation: Option<Symbol>,
    pub span: Span,
}

impl TypedValue {
    pub fn new(value: Value, type_annotation: Option<Symbol>, span: Span) -> Self {
        Self {
            value,
            type_annotation,
            span,
        }
    }

    pub fn without_annotation(value: Value) -> Self {
        Self {
            value,
            type_annotation: None,
            span: Span::DUMMY,
        }
    }
}
