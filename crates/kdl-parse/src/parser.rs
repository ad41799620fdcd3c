//! Recursive-descent parser producing a [`Document`] from KDL source text.
//!
//! The grammar is driven by a single token of lookahead, with an extra
//! lookahead slot reserved for the `identifier '='` check that tells a
//! property apart from a bare value argument. Errors are fatal: the first
//! one stops the parse rather than trying to resynchronize and keep going.

use kdl_lex::{Lexer, Token};
use kdl_util::{Span, Symbol};

use crate::decoder;
use crate::document::Document;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::node::Node;
use crate::value::{TypedValue, Value};

/// Parses a complete KDL document from `source`.
pub fn parse_document(source: &str) -> ParseResult<Document> {
    Parser::new(source)?.parse_top_level()
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: (Token, Span),
    lookahead: Option<(Token, Span)>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            lookahead: None,
        })
    }

    fn token(&self) -> &Token {
        &self.current.0
    }

    fn span(&self) -> Span {
        self.current.1
    }

    fn bump(&mut self) -> ParseResult<(Token, Span)> {
        let next = match self.lookahead.take() {
            Some(tok) => tok,
            None => self.lexer.next_token()?,
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn peek(&mut self) -> ParseResult<&(Token, Span)> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.lexer.next_token()?);
        }
        Ok(self.lookahead.as_ref().unwrap())
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.span())
    }

    fn is_node_terminator(&self) -> bool {
        matches!(self.token(), Token::Newline | Token::Semicolon | Token::Eof | Token::RBrace)
    }

    fn skip_node_terminators(&mut self) -> ParseResult<()> {
        while matches!(self.token(), Token::Newline | Token::Semicolon) {
            self.bump()?;
        }
        Ok(())
    }

    /// Parses the whole document: a run of (possibly slashdashed) nodes
    /// separated by terminators, to end of input.
    fn parse_top_level(&mut self) -> ParseResult<Document> {
        let mut nodes = Vec::new();
        self.skip_node_terminators()?;
        while !matches!(self.token(), Token::Eof) {
            if matches!(self.token(), Token::Slashdash) {
                self.bump()?;
                self.parse_node()?;
            } else {
                nodes.push(self.parse_node()?);
            }
            self.skip_node_terminators()?;
        }
        Ok(Document::new(nodes))
    }

    /// Parses a `{ ... }` children block body, consuming both braces.
    fn parse_children(&mut self) -> ParseResult<Vec<Node>> {
        self.expect_lbrace()?;
        let mut nodes = Vec::new();
        self.skip_node_terminators()?;
        while !matches!(self.token(), Token::RBrace) {
            if matches!(self.token(), Token::Eof) {
                return Err(self.error(ParseErrorKind::UnexpectedEof));
            }
            if matches!(self.token(), Token::Slashdash) {
                self.bump()?;
                self.parse_node()?;
            } else {
                nodes.push(self.parse_node()?);
            }
            self.skip_node_terminators()?;
        }
        self.bump()?; // '}'
        Ok(nodes)
    }

    fn expect_lbrace(&mut self) -> ParseResult<()> {
        if matches!(self.token(), Token::LBrace) {
            self.bump()?;
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedToken(format!(
                "expected '{{', found {:?}",
                self.token()
            ))))
        }
    }

    /// Parses a single node: optional type annotation, name, a run of
    /// arguments/properties/slashdashed entries, and an optional children
    /// block.
    fn parse_node(&mut self) -> ParseResult<Node> {
        let type_annotation = self.parse_adjacent_type_annotation()?;
        let (name, name_span) = self.parse_identifier_like()?;

        let mut node = Node::new(name, name_span);
        node.type_annotation = type_annotation;

        loop {
            match self.token() {
                Token::LBrace => {
                    node.children = self.parse_children()?;
                    break;
                }
                Token::Slashdash => {
                    self.bump()?;
                    self.parse_slashdashed_entry()?;
                }
                _ if self.is_node_terminator() => break,
                _ => self.parse_entry(&mut node)?,
            }
        }

        Ok(node)
    }

    /// Parses and discards a slashdashed argument, property, or children
    /// block — the one syntactic element a `/-` suppresses.
    fn parse_slashdashed_entry(&mut self) -> ParseResult<()> {
        if matches!(self.token(), Token::LBrace) {
            self.parse_children()?;
            return Ok(());
        }
        if self.is_node_terminator() {
            return Err(self.error(ParseErrorKind::DanglingSlashdash));
        }
        let mut scratch = Node::new(Symbol::intern("-"), self.span());
        self.parse_entry(&mut scratch)
    }

    /// Parses one argument or property into `node`. A bare/quoted
    /// identifier immediately followed by `=` is a property key; anything
    /// else is parsed as a value and appended as a positional argument.
    fn parse_entry(&mut self, node: &mut Node) -> ParseResult<()> {
        if matches!(self.token(), Token::Identifier(_) | Token::String(_))
            && matches!(self.peek()?.0, Token::Equals)
        {
            let (key, _) = self.parse_identifier_like()?;
            self.bump()?; // '='
            let type_annotation = self.parse_adjacent_type_annotation()?;
            let (value, span) = self.parse_value()?;
            node.set_prop(key, TypedValue::new(value, type_annotation, span));
            return Ok(());
        }

        let type_annotation = self.parse_adjacent_type_annotation()?;
        let (value, span) = self.parse_value()?;
        node.args.push(TypedValue::new(value, type_annotation, span));
        Ok(())
    }

    /// Parses a `(type)` annotation, requiring it be syntactically fused
    /// (no gap) both to its own parens and to whatever follows it.
    fn parse_adjacent_type_annotation(&mut self) -> ParseResult<Option<Symbol>> {
        if !matches!(self.token(), Token::LParen) {
            return Ok(None);
        }
        let lparen_span = self.span();
        self.bump()?;
        if self.span().start != lparen_span.end {
            return Err(self.error(ParseErrorKind::UnexpectedToken(
                "type annotation name must immediately follow '('".to_string(),
            )));
        }

        let (name, name_span) = self.parse_identifier_like()?;

        if !matches!(self.token(), Token::RParen) || self.span().start != name_span.end {
            return Err(self.error(ParseErrorKind::UnexpectedToken(
                "expected ')' immediately after type annotation name".to_string(),
            )));
        }
        let rparen_span = self.span();
        self.bump()?;

        if self.span().start != rparen_span.end {
            return Err(self.error(ParseErrorKind::UnexpectedToken(
                "type annotation must have no gap before what it annotates".to_string(),
            )));
        }

        Ok(Some(name))
    }

    /// Parses a bare/quoted identifier used as a node name or property key.
    fn parse_identifier_like(&mut self) -> ParseResult<(Symbol, Span)> {
        match self.token().clone() {
            Token::Identifier(sym) | Token::String(sym) => {
                let span = self.span();
                self.bump()?;
                Ok((sym, span))
            }
            other => Err(self.error(ParseErrorKind::UnexpectedToken(format!(
                "expected an identifier, found {:?}",
                other
            )))),
        }
    }

    /// Parses a single literal value.
    fn parse_value(&mut self) -> ParseResult<(Value, Span)> {
        let span = self.span();
        match self.token().clone() {
            Token::String(sym) => {
                self.bump()?;
                Ok((Value::String(sym.as_str().to_string()), span))
            }
            Token::Number { text, base } => {
                self.bump()?;
                Ok((decoder::decode_number(text, base, span)?, span))
            }
            Token::Keyword(kw) => {
                self.bump()?;
                Ok((decoder::decode_keyword(kw), span))
            }
            other => Err(self.error(ParseErrorKind::UnexpectedToken(format!(
                "expected a value, found {:?}",
                other
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Integer;

    #[test]
    fn single_bare_node() {
        let doc = parse_document("building\n").unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.nodes[0].name.eq_str("building"));
    }

    #[test]
    fn node_with_args_and_props() {
        let doc = parse_document("building \"Tower\" floors=42\n").unwrap();
        let node = &doc.nodes[0];
        assert_eq!(node.args.len(), 1);
        assert_eq!(node.args[0].value, Value::String("Tower".to_string()));
        let floors = node.prop("floors").unwrap();
        assert_eq!(floors.value, Value::Integer(Integer::Small(42)));
    }

    #[test]
    fn node_with_children() {
        let doc = parse_document("building {\n  address street=\"Main St\"\n}\n").unwrap();
        let node = &doc.nodes[0];
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].name.eq_str("address"));
    }

    #[test]
    fn property_last_occurrence_wins() {
        let doc = parse_document("node a=1 b=2 a=3\n").unwrap();
        let node = &doc.nodes[0];
        let keys: Vec<&str> = node.props.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(node.prop("a").unwrap().value, Value::Integer(Integer::Small(3)));
    }

    #[test]
    fn type_annotation_on_node_and_value() {
        let doc = parse_document("(shape)node val=(number)5\n").unwrap();
        let node = &doc.nodes[0];
        assert!(node.type_annotation.unwrap().eq_str("shape"));
        assert!(node.prop("val").unwrap().type_annotation.unwrap().eq_str("number"));
    }

    #[test]
    fn slashdash_suppresses_one_argument() {
        let doc = parse_document("node /-1 2\n").unwrap();
        let node = &doc.nodes[0];
        assert_eq!(node.args.len(), 1);
        assert_eq!(node.args[0].value, Value::Integer(Integer::Small(2)));
    }

    #[test]
    fn slashdash_suppresses_children_block() {
        let doc = parse_document("node /-{\n  a\n}\n").unwrap();
        assert!(doc.nodes[0].children.is_empty());
    }

    #[test]
    fn dangling_slashdash_is_an_error() {
        assert!(parse_document("node /-\n").is_err());
    }

    #[test]
    fn keyword_values() {
        let doc = parse_document("node #true #null #nan\n").unwrap();
        let node = &doc.nodes[0];
        assert_eq!(node.args[0].value, Value::Bool(true));
        assert_eq!(node.args[1].value, Value::Null);
        assert!(matches!(node.args[2].value, Value::Float(f) if f.is_nan()));
    }

    #[test]
    fn quoted_string_is_accepted_as_a_property_key() {
        let doc = parse_document("node \"key\"=1\n").unwrap();
        let node = &doc.nodes[0];
        assert!(node.args.is_empty());
        assert_eq!(node.prop("key").unwrap().value, Value::Integer(Integer::Small(1)));
    }

    #[test]
    fn multiple_top_level_nodes() {
        let doc = parse_document("a 1\nb 2\nc 3\n").unwrap();
        assert_eq!(doc.nodes.len(), 3);
    }
}
