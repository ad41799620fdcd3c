//! Bare identifier and `#`-keyword lexing.

use kdl_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Keyword, Token};
use crate::unicode;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a bare identifier starting at the cursor.
    ///
    /// Bare identifiers that spell one of KDL's reserved words (`true`,
    /// `false`, `null`, `inf`, `-inf`, `nan`) are rejected — those words
    /// must be quoted to be used as a name.
    pub fn lex_identifier(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();

        // A leading sign is allowed in a bare identifier as long as what
        // follows isn't a digit (that's a number) — e.g. `-x` and `+y` are
        // valid node names, `-1` is not.
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }

        while unicode::is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);

        if unicode::is_reserved_word(text) {
            return Err(self.error(LexErrorKind::ReservedIdentifier(text.to_string())));
        }

        Ok(Token::Identifier(Symbol::intern(text)))
    }

    /// Lexes a `#`-prefixed keyword literal (`#true`, `#false`, `#null`,
    /// `#inf`, `#-inf`, `#nan`).
    pub fn lex_keyword(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();
        self.cursor.advance(); // '#'

        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        while unicode::is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = &self.cursor.slice_from(start)[1..];

        let keyword = match text {
            "true" => Keyword::True,
            "false" => Keyword::False,
            "null" => Keyword::Null,
            "inf" => Keyword::Inf,
            "-inf" => Keyword::NegInf,
            "nan" => Keyword::Nan,
            other => {
                return Err(self.error(LexErrorKind::ReservedIdentifier(format!("#{}", other))));
            }
        };

        Ok(Token::Keyword(keyword))
    }
}
