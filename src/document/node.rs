//! Parse-tree node types.
//!
//! A parsed YAML stream is a list of [`Node::Document`] trees. Each node owns
//! its children outright and records the structural path it was reached by,
//! so no parent links are needed to answer "where is this node".
//!
//! # Example
//!
//! ```
//! use kustomize_yaml_helper::document::node::{Node, NodeKind};
//! use kustomize_yaml_helper::document::parser::parse_documents;
//!
//! let docs = parse_documents("resources:\n  - ./base\n").unwrap();
//! assert_eq!(docs.len(), 1);
//! assert_eq!(docs[0].kind(), NodeKind::Document);
//! assert_eq!(docs[0].structural_path(), "$");
//! ```

use super::token::Token;
use std::fmt;

/// The six node shapes a document tree is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Scalar,
    MappingEntry,
    Mapping,
    Sequence,
    SequenceEntry,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Document => "document",
            NodeKind::Scalar => "scalar",
            NodeKind::MappingEntry => "mapping entry",
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::SequenceEntry => "sequence entry",
        };
        f.write_str(name)
    }
}

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// One document of the stream. `body` is `None` only for streams the
    /// parser reports as having no content at all.
    Document {
        token: Token,
        path: String,
        body: Option<Box<Node>>,
    },
    /// A leaf value (plain, quoted, block, or alias).
    Scalar { token: Token, path: String },
    /// A `key: value` pair inside a mapping.
    MappingEntry {
        token: Token,
        path: String,
        key: Box<Node>,
        value: Box<Node>,
    },
    Mapping {
        token: Token,
        path: String,
        entries: Vec<Node>,
    },
    Sequence {
        token: Token,
        path: String,
        entries: Vec<Node>,
    },
    /// One `- item` of a sequence.
    SequenceEntry {
        token: Token,
        path: String,
        value: Box<Node>,
    },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document { .. } => NodeKind::Document,
            Node::Scalar { .. } => NodeKind::Scalar,
            Node::MappingEntry { .. } => NodeKind::MappingEntry,
            Node::Mapping { .. } => NodeKind::Mapping,
            Node::Sequence { .. } => NodeKind::Sequence,
            Node::SequenceEntry { .. } => NodeKind::SequenceEntry,
        }
    }

    /// Returns the token that represents this node in the source.
    pub fn token(&self) -> &Token {
        match self {
            Node::Document { token, .. }
            | Node::Scalar { token, .. }
            | Node::MappingEntry { token, .. }
            | Node::Mapping { token, .. }
            | Node::Sequence { token, .. }
            | Node::SequenceEntry { token, .. } => token,
        }
    }

    /// Returns the node's path from its document root, e.g. `$.resources[0]`.
    ///
    /// The path is fixed when the tree is built; this is a plain readout.
    pub fn structural_path(&self) -> &str {
        match self {
            Node::Document { path, .. }
            | Node::Scalar { path, .. }
            | Node::MappingEntry { path, .. }
            | Node::Mapping { path, .. }
            | Node::Sequence { path, .. }
            | Node::SequenceEntry { path, .. } => path,
        }
    }

    /// Returns the direct children in source order. Mapping entries yield
    /// their key before their value.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Document { body, .. } => body.iter().map(|b| b.as_ref()).collect(),
            Node::Scalar { .. } => Vec::new(),
            Node::MappingEntry { key, value, .. } => vec![key.as_ref(), value.as_ref()],
            Node::Mapping { entries, .. } | Node::Sequence { entries, .. } => {
                entries.iter().collect()
            }
            Node::SequenceEntry { value, .. } => vec![value.as_ref()],
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::token::Position;

    fn scalar(text: &str, line: usize, column: usize, path: &str) -> Node {
        Node::Scalar {
            token: Token::new(text, Position::new(line, column)),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_entry_children_are_key_then_value() {
        let entry = Node::MappingEntry {
            token: Token::new(":", Position::new(1, 5)),
            path: "$.name".to_string(),
            key: Box::new(scalar("name", 1, 1, "$.name")),
            value: Box::new(scalar("web", 1, 7, "$.name")),
        };

        let children = entry.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].token().text(), "name");
        assert_eq!(children[1].token().text(), "web");
    }

    #[test]
    fn test_scalar_has_no_children() {
        let node = scalar("x", 1, 1, "$");
        assert!(node.children().is_empty());
        assert!(node.is_scalar());
        assert_eq!(node.kind(), NodeKind::Scalar);
    }

    #[test]
    fn test_empty_document_has_no_children() {
        let doc = Node::Document {
            token: Token::empty(Position::new(1, 1)),
            path: "$".to_string(),
            body: None,
        };
        assert!(doc.children().is_empty());
        assert_eq!(doc.structural_path(), "$");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::SequenceEntry.to_string(), "sequence entry");
        assert_eq!(NodeKind::Mapping.to_string(), "mapping");
    }
}
