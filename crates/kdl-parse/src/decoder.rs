//! Decodes the lexer's undecoded `Number`/`Keyword` tokens into [`Value`]s.
//!
//! The lexer only validates *shape* (sign, base prefix, underscore
//! placement); this module does the arithmetic, including KDL's
//! overflow-promotion policy: an integer literal that doesn't fit in `i128`
//! is promoted to an arbitrary-precision [`BigInt`] rather than rejected.

use kdl_lex::{Keyword, NumberBase};
use kdl_util::{Span, Symbol};
use num_bigint::BigInt;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::value::{Integer, Value};

/// Decodes a `Token::Number { text, base }` into its `Value`.
pub fn decode_number(text: Symbol, base: NumberBase, span: Span) -> ParseResult<Value> {
    let raw = text.as_str();

    let (sign, unsigned) = match raw.as_bytes().first() {
        Some(b'+') => (1i8, &raw[1..]),
        Some(b'-') => (-1i8, &raw[1..]),
        _ => (1i8, raw),
    };

    match base {
        NumberBase::Decimal => decode_decimal(unsigned, sign, raw, span),
        NumberBase::Hex => decode_based_integer(strip_prefix(unsigned), 16, sign, raw, span),
        NumberBase::Octal => decode_based_integer(strip_prefix(unsigned), 8, sign, raw, span),
        NumberBase::Binary => decode_based_integer(strip_prefix(unsigned), 2, sign, raw, span),
    }
}

/// Decodes a `Token::Keyword` into its `Value`.
pub fn decode_keyword(keyword: Keyword) -> Value {
    match keyword {
        Keyword::True => Value::Bool(true),
        Keyword::False => Value::Bool(false),
        Keyword::Null => Value::Null,
        Keyword::Inf => Value::Float(f64::INFINITY),
        Keyword::NegInf => Value::Float(f64::NEG_INFINITY),
        Keyword::Nan => Value::Float(f64::NAN),
    }
}

fn strip_prefix(unsigned: &str) -> &str {
    &unsigned[2..]
}

fn strip_underscores(digits: &str) -> String {
    digits.chars().filter(|&c| c != '_').collect()
}

fn decode_based_integer(
    digits: &str,
    radix: u32,
    sign: i8,
    raw: &str,
    span: Span,
) -> ParseResult<Value> {
    let cleaned = strip_underscores(digits);
    let mut magnitude = BigInt::parse_bytes(cleaned.as_bytes(), radix).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnexpectedToken(format!("malformed number literal: {}", raw)),
            span,
        )
    })?;
    if sign < 0 {
        magnitude = -magnitude;
    }
    Ok(Value::Integer(promote(magnitude)))
}

fn decode_decimal(unsigned: &str, sign: i8, raw: &str, span: Span) -> ParseResult<Value> {
    if unsigned.contains('.') || unsigned.contains('e') || unsigned.contains('E') {
        let cleaned = strip_underscores(unsigned);
        let magnitude: f64 = cleaned.parse().map_err(|_| {
            ParseError::new(
                ParseErrorKind::UnexpectedToken(format!("malformed float literal: {}", raw)),
                span,
            )
        })?;
        return Ok(Value::Float(if sign < 0 { -magnitude } else { magnitude }));
    }

    let cleaned = strip_underscores(unsigned);
    let mut magnitude = BigInt::parse_bytes(cleaned.as_bytes(), 10).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnexpectedToken(format!("malformed number literal: {}", raw)),
            span,
        )
    })?;
    if sign < 0 {
        magnitude = -magnitude;
    }
    Ok(Value::Integer(promote(magnitude)))
}

/// Demotes a `BigInt` back to `i128` when it fits; otherwise keeps the
/// arbitrary-precision form.
fn promote(big: BigInt) -> Integer {
    match i128::try_from(&big) {
        Ok(small) => Integer::Small(small),
        Err(_) => Integer::Big(big),
    }
}
