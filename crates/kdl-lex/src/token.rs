//! Token kinds produced by the lexer.

use kdl_util::Symbol;

/// The base a number literal was written in. Carried alongside the raw
/// digit text so that [`kdl_parse`](../../kdl_parse/index.html)'s value
/// decoder can apply KDL's overflow-promotion policy without the lexer
/// needing to know about `num-bigint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hex,
}

/// KDL's reserved keyword literals (`#true`, `#false`, `#null`, `#inf`,
/// `#-inf`, `#nan`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    True,
    False,
    Null,
    Inf,
    NegInf,
    Nan,
}

/// A lexical token. `Span` information is tracked alongside tokens by the
/// lexer rather than embedded here, so that `Token` stays `Copy`-friendly
/// and cheap to compare in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A bare or quoted identifier: a node name, property key, or type
    /// annotation tag.
    Identifier(Symbol),
    /// A decoded string literal (any of the four syntactic string forms
    /// collapse to this token once escapes/dedent are resolved).
    String(Symbol),
    /// The undecoded text of a number literal, sign included, underscores
    /// left in place.
    Number { text: Symbol, base: NumberBase },
    /// One of the `#`-prefixed reserved keywords.
    Keyword(Keyword),
    LBrace,
    RBrace,
    LParen,
    RParen,
    Equals,
    Semicolon,
    /// A bare newline (whitespace and comments are not tokenized; newlines
    /// are, because they terminate a node in KDL's grammar).
    Newline,
    /// A `\` at the end of a line, suppressing the following newline.
    LineContinuation,
    /// `/-`, suppressing the next node/argument/property/children block.
    Slashdash,
    /// A standalone comment the grammar layer never has to see in practice
    /// (comments are skipped like whitespace); kept for completeness with
    /// the lexer's token taxonomy.
    Comment,
    Eof,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}
