//! The binder's value coercion table.
//!
//! KDL only distinguishes five value kinds at parse time; a schema often
//! wants a narrower or slightly different Rust type. These functions are the
//! only coercions the binder performs implicitly — anything else is a
//! [`crate::error::BindErrorKind::TypeMismatch`].

use kdl_parse::{Integer, Value};

pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(Integer::Small(n)) => i64::try_from(*n).ok(),
        Value::Integer(Integer::Big(n)) => {
            let digits = n.to_string();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Integers coerce losslessly to floats up to `f64`'s precision; this is the
/// one numeric-kind-widening coercion the binder performs.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(i.to_f64()),
        _ => None,
    }
}

pub fn coerce_str(value: &Value) -> Option<&str> {
    value.as_str()
}

pub fn coerce_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widens_to_float() {
        let value = Value::Integer(Integer::Small(5));
        assert_eq!(coerce_f64(&value), Some(5.0));
    }

    #[test]
    fn string_does_not_coerce_to_number() {
        let value = Value::String("nope".to_string());
        assert_eq!(coerce_i64(&value), None);
        assert_eq!(coerce_f64(&value), None);
    }
}
