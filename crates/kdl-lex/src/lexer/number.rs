//! Number literal lexing.
//!
//! The lexer only validates shape here (sign, prefix, digit runs,
//! underscore placement) and hands the raw text off to `kdl_parse`'s value
//! decoder, which is responsible for the actual integer/float conversion
//! and the overflow-promotion policy.

use kdl_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::{NumberBase, Token};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal: `[+-]?digit_run` in decimal, or
    /// `[+-]?0[xbo]digit_run` in another base, with an optional decimal
    /// point and exponent in the decimal case. Underscores may appear
    /// between digits but never adjacent to the sign, base prefix, decimal
    /// point, exponent marker, or at either end of a digit run.
    pub fn lex_number(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();

        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => {
                    self.cursor.advance_n(2);
                    return self.finish_based_integer(start, NumberBase::Hex, 16);
                }
                'b' | 'B' => {
                    self.cursor.advance_n(2);
                    return self.finish_based_integer(start, NumberBase::Binary, 2);
                }
                'o' | 'O' => {
                    self.cursor.advance_n(2);
                    return self.finish_based_integer(start, NumberBase::Octal, 8);
                }
                _ => {}
            }
        }

        self.consume_digit_run(10)?;

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.consume_digit_run(10)?;
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if !self.cursor.current_char().is_ascii_digit() {
                return Err(self.error(LexErrorKind::MalformedNumber(
                    "no digits in float exponent".to_string(),
                )));
            }
            self.consume_digit_run(10)?;
        }

        let text = self.cursor.slice_from(start);
        Ok(Token::Number {
            text: Symbol::intern(text),
            base: NumberBase::Decimal,
        })
    }

    fn finish_based_integer(
        &mut self,
        start: usize,
        base: NumberBase,
        radix: u32,
    ) -> LexResult<Token> {
        let digit_start = self.cursor.position();
        self.consume_digit_run(radix)?;
        if self.cursor.position() == digit_start {
            return Err(self.error(LexErrorKind::MalformedNumber(format!(
                "no digits after base-{} prefix",
                radix
            ))));
        }
        let text = self.cursor.slice_from(start);
        Ok(Token::Number {
            text: Symbol::intern(text),
            base,
        })
    }

    /// Consumes a run of digits in `radix`, allowing underscores between
    /// digits. Rejects a leading, trailing, or doubled underscore.
    fn consume_digit_run(&mut self, radix: u32) -> LexResult<()> {
        let mut last_was_digit = false;
        let mut consumed_any = false;

        loop {
            let c = self.cursor.current_char();
            if is_digit_in_base(c, radix) {
                self.cursor.advance();
                last_was_digit = true;
                consumed_any = true;
            } else if c == '_' {
                if !last_was_digit {
                    return Err(self.error(LexErrorKind::MalformedNumber(
                        "underscore must be preceded by a digit".to_string(),
                    )));
                }
                if !is_digit_in_base(self.cursor.peek_char(1), radix) {
                    return Err(self.error(LexErrorKind::MalformedNumber(
                        "underscore must be followed by a digit".to_string(),
                    )));
                }
                self.cursor.advance();
                last_was_digit = false;
            } else {
                break;
            }
        }

        if !consumed_any {
            return Err(self.error(LexErrorKind::MalformedNumber(
                "expected at least one digit".to_string(),
            )));
        }

        Ok(())
    }
}
