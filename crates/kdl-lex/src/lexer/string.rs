//! String literal lexing: ordinary, raw, block-quoted, and block-raw forms.

use kdl_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::Token;
use crate::unicode::{self, parse_hex_codepoint};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Dispatches on whether this is an ordinary or block-quoted string.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        if self.cursor.peek_char(1) == '"' && self.cursor.peek_char(2) == '"' {
            self.lex_block_string(0)
        } else {
            self.lex_plain_string()
        }
    }

    fn lex_plain_string(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_col = self.cursor.column();
        self.cursor.advance(); // opening quote

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(crate::error::LexError::new(
                    LexErrorKind::UnterminatedString,
                    kdl_util::Span::new(start, self.cursor.position(), start_line, start_col),
                ));
            }

            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                break;
            }

            if unicode::is_newline(c) {
                return Err(crate::error::LexError::new(
                    LexErrorKind::UnterminatedString,
                    kdl_util::Span::new(start, self.cursor.position(), start_line, start_col),
                ));
            }

            if c == '\\' {
                self.cursor.advance();
                if unicode::is_newline(self.cursor.current_char()) {
                    // Escaped line continuation: swallow the newline and any
                    // leading whitespace on the following line.
                    self.cursor.advance();
                    while unicode::is_whitespace(self.cursor.current_char()) {
                        self.cursor.advance();
                    }
                    continue;
                }
                content.push(self.parse_escape()?);
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        Ok(Token::String(Symbol::intern(&content)))
    }

    /// Lexes a raw string: `#*"..."#*` with a matching hash count on both
    /// sides, or its block variant if the body opens with `"""`.
    pub fn lex_raw_string(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();
        let mut hash_count = 0usize;
        while self.cursor.current_char() == '#' {
            hash_count += 1;
            self.cursor.advance();
        }

        if self.cursor.current_char() != '"' {
            return Err(self.error(LexErrorKind::MalformedNumber(
                "expected '\"' after raw string hash prefix".to_string(),
            )));
        }

        if self.cursor.peek_char(1) == '"' && self.cursor.peek_char(2) == '"' {
            return self.lex_block_string(hash_count);
        }

        self.cursor.advance(); // opening quote

        let mut closing = String::from("\"");
        for _ in 0..hash_count {
            closing.push('#');
        }

        let content_start = self.cursor.position();

        while !self.cursor.is_at_end() {
            if self.matches_ahead(&closing) {
                let content = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance_n(closing.len());
                return Ok(Token::String(Symbol::intern(&content)));
            }
            self.cursor.advance();
        }

        Err(crate::error::LexError::new(
            LexErrorKind::UnterminatedString,
            self.span_from(start),
        ))
    }

    /// Lexes `"""..."""` or `#*"""..."""#*`. `hash_count` is 0 for the
    /// non-raw block form.
    fn lex_block_string(&mut self, hash_count: usize) -> LexResult<Token> {
        let start = self.cursor.position();
        self.cursor.advance_n(3); // opening triple quote

        if !unicode::is_newline(self.cursor.current_char()) {
            return Err(self.error(LexErrorKind::BadBlockStringIndent));
        }
        self.cursor.advance();

        let mut closing = String::from("\"\"\"");
        for _ in 0..hash_count {
            closing.push('#');
        }

        let body_start = self.cursor.position();
        let mut body_end = None;

        loop {
            if self.cursor.is_at_end() {
                break;
            }
            if self.matches_ahead(&closing) {
                body_end = Some(self.cursor.position());
                self.cursor.advance_n(closing.len());
                break;
            }
            self.cursor.advance();
        }

        let body_end = match body_end {
            Some(pos) => pos,
            None => {
                return Err(crate::error::LexError::new(
                    LexErrorKind::UnterminatedString,
                    self.span_from(start),
                ))
            }
        };

        let raw_body = &self.cursor.source()[body_start..body_end];
        let normalized: String = raw_body
            .chars()
            .map(|c| if unicode::is_newline(c) { '\n' } else { c })
            .collect();

        let mut lines: Vec<&str> = normalized.split('\n').collect();
        // The line just before the closing delimiter holds the dedent
        // prefix and is itself dropped from the content.
        let prefix = lines.pop().unwrap_or("");
        if !prefix.chars().all(unicode::is_whitespace) {
            return Err(self.error(LexErrorKind::BadBlockStringIndent));
        }

        let mut dedented = Vec::with_capacity(lines.len());
        for line in &lines {
            if line.is_empty() {
                dedented.push(String::new());
                continue;
            }
            match line.strip_prefix(prefix) {
                Some(rest) => dedented.push(rest.to_string()),
                None => return Err(self.error(LexErrorKind::BadBlockStringIndent)),
            }
        }

        Ok(Token::String(Symbol::intern(&dedented.join("\n"))))
    }

    fn matches_ahead(&self, needle: &str) -> bool {
        for (i, expected) in needle.chars().enumerate() {
            if self.cursor.peek_char(i) != expected {
                return false;
            }
        }
        true
    }

    fn span_from(&self, start: usize) -> kdl_util::Span {
        kdl_util::Span::new(
            start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Parses the escape following a consumed `\`: `n r t \\ " b f s` and
    /// `u{HEX}` (1-6 hex digits).
    fn parse_escape(&mut self) -> LexResult<char> {
        if self.cursor.is_at_end() {
            return Err(self.error(LexErrorKind::UnterminatedString));
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            's' => Ok(' '),
            'u' => {
                if self.cursor.current_char() != '{' {
                    return Err(self.error(LexErrorKind::InvalidHexScalar(
                        "expected '{' after \\u".to_string(),
                    )));
                }
                self.cursor.advance();
                let hex_start = self.cursor.position();
                while self.cursor.current_char() != '}' && !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
                let hex = self.cursor.slice_from(hex_start).to_string();
                if self.cursor.current_char() != '}' {
                    return Err(self.error(LexErrorKind::InvalidHexScalar(hex)));
                }
                self.cursor.advance();
                parse_hex_codepoint(&hex)
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error(LexErrorKind::InvalidHexScalar(hex.clone())))
            }
            other => Err(self.error(LexErrorKind::InvalidEscape(other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_str(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.next_token().expect("lex ok").0
    }

    #[test]
    fn simple_string() {
        assert_eq!(lex_str("\"hello\""), Token::String(Symbol::intern("hello")));
    }

    #[test]
    fn string_with_escapes() {
        assert_eq!(
            lex_str("\"hello\\nworld\""),
            Token::String(Symbol::intern("hello\nworld"))
        );
        assert_eq!(lex_str("\"a\\sb\""), Token::String(Symbol::intern("a b")));
    }

    #[test]
    fn string_with_unicode_escape() {
        assert_eq!(lex_str("\"\\u{41}\""), Token::String(Symbol::intern("A")));
    }

    #[test]
    fn raw_string_with_quotes() {
        assert_eq!(
            lex_str("#\"hello \"world\"\"#"),
            Token::String(Symbol::intern("hello \"world\""))
        );
    }

    #[test]
    fn unterminated_string_errors() {
        let mut lexer = Lexer::new("\"hello");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn block_string_dedents_to_common_prefix() {
        let source = "\"\"\"\n    one\n    two\n    \"\"\"";
        assert_eq!(lex_str(source), Token::String(Symbol::intern("one\ntwo")));
    }
}
