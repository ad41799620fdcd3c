//! Character classification for the KDL grammar.
//!
//! This module provides the predicates the lexer needs to classify a
//! character as whitespace, a newline, a bare-identifier constituent, or
//! disallowed outright. These correspond to KDL 2.0's character classes.

/// Non-newline Unicode whitespace, per the KDL spec's whitespace production.
/// Includes the ASCII space/tab plus the Unicode `Zs` space separators, plus
/// a handful of format characters KDL treats as inter-token space.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' // tab
        | '\u{0020}' // space
        | '\u{00A0}' // no-break space
        | '\u{1680}'
        | '\u{2000}'..='\u{200A}'
        | '\u{202F}'
        | '\u{205F}'
        | '\u{3000}'
        | '\u{FEFF}' // BOM, only meaningful at start of document
    )
}

/// Characters KDL treats as newlines. Inside block strings all of these are
/// normalized to `\n` when computing the dedent prefix and final content.
pub fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\u{000A}' // \n
        | '\u{000D}' // \r
        | '\u{0085}' // NEL
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{2028}' // line separator
        | '\u{2029}' // paragraph separator
    )
}

/// Characters that may never appear literally in a KDL document, even inside
/// strings: bidirectional control characters, C0/C1 control characters
/// (other than whitespace/newlines handled above), and lone surrogates.
pub fn is_disallowed(c: char) -> bool {
    let cp = c as u32;
    // C0 controls except the ones claimed by whitespace/newline above (tab,
    // \n, \r, VT, FF), plus DEL, C1 controls, bidi controls, and surrogates.
    matches!(cp, 0x200E | 0x200F | 0x202A..=0x202E | 0x2066..=0x2069)
        || matches!(cp, 0x00..=0x08 | 0x0E..=0x1F)
        || cp == 0x7F
        || (0x80..=0x9F).contains(&cp)
        || (0xD800..=0xDFFF).contains(&cp)
}

/// Characters that may never start or continue a bare (unquoted) identifier,
/// beyond whitespace/newlines which are already excluded by tokenization.
fn is_reserved_punctuation(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '{' | '}' | '[' | ']' | '/' | '\\' | '"' | '#' | ';' | '=' | ','
    )
}

/// True if `c` may start a bare identifier.
///
/// A bare identifier cannot start with an ASCII digit, whitespace, a
/// newline, the disallowed-punctuation set, or a sign character (`+`/`-`)
/// unless the sign is followed by a non-digit, non-dot continuation (callers
/// handle the sign lookahead themselves; this predicate only covers the
/// character in isolation).
pub fn is_ident_start(c: char) -> bool {
    if c.is_ascii_digit() {
        return false;
    }
    if is_whitespace(c) || is_newline(c) || is_disallowed(c) {
        return false;
    }
    !is_reserved_punctuation(c)
}

/// True if `c` may continue a bare identifier once started.
pub fn is_ident_continue(c: char) -> bool {
    if is_whitespace(c) || is_newline(c) || is_disallowed(c) {
        return false;
    }
    !is_reserved_punctuation(c)
}

/// True if `word` is a reserved keyword that cannot appear as a bare,
/// unprefixed identifier (it must be quoted to be used as a node name,
/// property key, etc).
pub fn is_reserved_word(word: &str) -> bool {
    matches!(word, "true" | "false" | "null" | "inf" | "-inf" | "nan")
}

/// Checks if a character is a valid digit in the given numeric base.
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Converts a hex character to its numeric value.
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Parses a 1-to-8 digit hex string into a Unicode codepoint, rejecting
/// values above `0x10FFFF`. Used for `\u{...}` escapes.
pub fn parse_hex_codepoint(hex: &str) -> Option<u32> {
    if hex.is_empty() || hex.len() > 8 {
        return None;
    }
    let mut value = 0u32;
    for c in hex.chars() {
        value = value.checked_mul(16)?;
        value = value.checked_add(hex_digit_to_value(c)? as u32)?;
    }
    if value > 0x10FFFF {
        return None;
    }
    Some(value)
}

/// Checks if a codepoint is a valid Unicode scalar value (excludes
/// surrogates and values beyond `0x10FFFF`).
pub fn is_valid_scalar(codepoint: u32) -> bool {
    if codepoint > 0x10FFFF {
        return false;
    }
    !(0xD800..=0xDFFF).contains(&codepoint)
}

/// Converts a codepoint to a char if valid.
pub fn codepoint_to_char(codepoint: u32) -> Option<char> {
    if is_valid_scalar(codepoint) {
        char::from_u32(codepoint)
    } else {
        None
    }
}
