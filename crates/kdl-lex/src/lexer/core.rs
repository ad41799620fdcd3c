//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct and its dispatch loop.

use kdl_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::Token;
use crate::unicode;

/// Lexer for the KDL 2.0 document language.
///
/// The lexer transforms source text into a stream of tokens. It handles
/// whitespace and comment skipping, slashdash detection, identifiers,
/// keywords, and the four string/number literal forms. It does not decide
/// whether a token is an argument or a property, or where a node begins and
/// ends — that is `kdl_parse`'s job.
///
/// A `Lexer` is single-use: construct one per source string, drive it to
/// `Token::Eof`, and discard it. Independent lexer instances share no state
/// and may run on different threads concurrently.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
    bom_checked: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
        }
    }

    /// Returns the next token from the source, along with its span.
    pub fn next_token(&mut self) -> LexResult<(Token, Span)> {
        self.skip_insignificant()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok((Token::Eof, self.span_here()));
        }

        let c = self.cursor.current_char();

        let token = match c {
            '(' => {
                self.cursor.advance();
                Token::LParen
            }
            ')' => {
                self.cursor.advance();
                Token::RParen
            }
            '{' => {
                self.cursor.advance();
                Token::LBrace
            }
            '}' => {
                self.cursor.advance();
                Token::RBrace
            }
            '=' => {
                self.cursor.advance();
                Token::Equals
            }
            ';' => {
                self.cursor.advance();
                Token::Semicolon
            }
            '/' if self.cursor.peek_char(1) == '-' => {
                self.cursor.advance_n(2);
                Token::Slashdash
            }
            '"' => self.lex_string()?,
            '#' => self.lex_hash()?,
            c if unicode::is_newline(c) => {
                self.consume_newline_run();
                Token::Newline
            }
            c if c.is_ascii_digit() => self.lex_number()?,
            '+' | '-' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number()?,
            c if unicode::is_ident_start(c) => self.lex_identifier()?,
            c => {
                return Err(self.error(LexErrorKind::DisallowedChar(c as u32)));
            }
        };

        Ok((token, self.span_here()))
    }

    /// Skips whitespace, line/block comments, and line continuations. Does
    /// not skip newlines (those are significant tokens) or slashdash
    /// markers (those are significant tokens too).
    fn skip_insignificant(&mut self) -> LexResult<()> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.current_char() == '\u{FEFF}' {
                self.cursor.advance();
            }
        }

        loop {
            let c = self.cursor.current_char();

            if unicode::is_whitespace(c) {
                self.cursor.advance();
                continue;
            }

            if c == '\\' {
                // Line continuation: a backslash followed by optional
                // whitespace then a newline suppresses that newline.
                let snapshot = self.cursor.snapshot();
                self.cursor.advance();
                while unicode::is_whitespace(self.cursor.current_char()) {
                    self.cursor.advance();
                }
                if unicode::is_newline(self.cursor.current_char()) {
                    self.consume_newline_run();
                    continue;
                }
                self.cursor.restore(snapshot);
                return Err(self.error(LexErrorKind::DisallowedChar('\\' as u32)));
            }

            if c == '/' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                while !self.cursor.is_at_end() && !unicode::is_newline(self.cursor.current_char())
                {
                    self.cursor.advance();
                }
                continue;
            }

            if c == '/' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment()?;
                continue;
            }

            break;
        }

        Ok(())
    }

    fn skip_block_comment(&mut self) -> LexResult<()> {
        const MAX_DEPTH: u32 = 128;
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_col = self.cursor.column();
        self.cursor.advance_n(2);
        let mut depth = 1u32;

        while depth > 0 {
            if self.cursor.is_at_end() {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedComment,
                    Span::new(start, self.cursor.position(), start_line, start_col),
                ));
            }
            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance_n(2);
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedComment,
                        Span::new(start, self.cursor.position(), start_line, start_col),
                    ));
                }
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }

        Ok(())
    }

    fn consume_newline_run(&mut self) {
        while !self.cursor.is_at_end() && unicode::is_newline(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    fn lex_hash(&mut self) -> LexResult<Token> {
        // `#` introduces either a raw string (`#"..."#`, possibly with more
        // hashes or the block forms) or a reserved keyword literal.
        if self.cursor.peek_char(1) == '"' || self.looks_like_raw_string_prefix() {
            return self.lex_raw_string();
        }
        self.lex_keyword()
    }

    fn looks_like_raw_string_prefix(&self) -> bool {
        let mut offset = 1;
        while self.cursor.peek_char(offset) == '#' {
            offset += 1;
        }
        self.cursor.peek_char(offset) == '"'
    }

    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.span_here())
    }

    pub(crate) fn span_here(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}
