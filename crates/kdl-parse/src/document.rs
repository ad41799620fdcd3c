//! The `Document` type and navigation sugar over it.

use crate::error::{ParseError, ParseErrorKind};
use crate::node::Node;
use kdl_util::Span;

/// A parsed KDL document: an ordered list of top-level nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.name.eq_str(name))
    }

    /// Descends a `/`-separated path from the document root. Each segment
    /// matches *all* same-named siblings at that level (a flat multi-match
    /// descend) — use [`Document::find_single`] for the single-match `//`
    /// form.
    pub fn find_all<'a>(&'a self, path: &str) -> Vec<&'a Node> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut current: Vec<&Node> = self.nodes.iter().collect();
        for segment in segments {
            let mut next = Vec::new();
            for node in current {
                next.extend(node.children_named(segment));
            }
            current = next;
        }
        current
    }

    /// Descends a `//`-separated path, requiring exactly one match at every
    /// level. Returns `NotFound` if a segment has no matches and
    /// `Ambiguous` if a segment has more than one.
    pub fn find_single(&self, path: &str) -> Result<&Node, ParseError> {
        let segments: Vec<&str> = path.split("//").filter(|s| !s.is_empty()).collect();
        let mut pool: Vec<&Node> = self.nodes.iter().collect();
        let mut result: Option<&Node> = None;

        for segment in &segments {
            let matches: Vec<&Node> = pool.iter().filter(|n| n.name.eq_str(segment)).copied().collect();
            match matches.len() {
                0 => {
                    return Err(ParseError::new(
                        ParseErrorKind::NotFound(segment.to_string()),
                        Span::DUMMY,
                    ))
                }
                1 => {
                    result = Some(matches[0]);
                    pool = matches[0].children.iter().collect();
                }
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::Ambiguous(segment.to_string()),
                        Span::DUMMY,
                    ))
                }
            }
        }

        result.ok_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEof, Span::DUMMY))
    }

    /// Renders this document back to canonical KDL text.
    pub fn emit(&self) -> String {
        crate::emit::emit_document(self)
    }
}
