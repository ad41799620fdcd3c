//! Comment skipping and slashdash detection.
//!
//! The actual skip logic lives in `core::Lexer::skip_insignificant` and
//! `skip_block_comment` — comments are insignificant like whitespace, with
//! one exception: `/-` is not a comment marker, it's the `Slashdash` token
//! that suppresses the next node/argument/property/children block, and the
//! grammar layer needs to see it.

#[cfg(test)]
mod tests {
    use crate::token::Token;
    use crate::Lexer;
    use kdl_util::Symbol;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let (tok, _) = lexer.next_token().expect("lex ok");
            if tok.is_eof() {
                break;
            }
            tokens.push(tok);
        }
        tokens
    }

    #[test]
    fn line_comment_is_skipped() {
        assert_eq!(
            lex_all("node // trailing comment\n"),
            vec![Token::Identifier(Symbol::intern("node")), Token::Newline]
        );
    }

    #[test]
    fn block_comment_is_skipped() {
        assert_eq!(
            lex_all("a /* inline */ b"),
            vec![
                Token::Identifier(Symbol::intern("a")),
                Token::Identifier(Symbol::intern("b")),
            ]
        );
    }

    #[test]
    fn nested_block_comments() {
        assert_eq!(
            lex_all("a /* outer /* inner */ still outer */ b"),
            vec![
                Token::Identifier(Symbol::intern("a")),
                Token::Identifier(Symbol::intern("b")),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_errors() {
        let mut lexer = Lexer::new("a /* never closes");
        assert!(lexer.next_token().is_ok()); // `a`
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn slashdash_is_its_own_token() {
        assert_eq!(
            lex_all("/-node"),
            vec![Token::Slashdash, Token::Identifier(Symbol::intern("node"))]
        );
    }

    #[test]
    fn line_continuation_suppresses_newline() {
        assert_eq!(
            lex_all("a \\\n  b"),
            vec![
                Token::Identifier(Symbol::intern("a")),
                Token::Identifier(Symbol::intern("b")),
            ]
        );
    }
}
