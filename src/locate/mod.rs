//! Position lookup over document trees.
//!
//! Walks each document in pre-order and keeps the last node whose own token
//! covers the target. Parents are visited before their children, so the node
//! kept is the most deeply nested one whose token text sits under the cursor.
//!
//! Composite nodes only match on their own token (`-`, `:`, `[`, `{`), not on
//! the region their children span. A cursor on whitespace between entries
//! matches nothing in that region and the lookup falls through to whatever
//! else covers it, if anything.

use crate::document::{Node, Position};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Finds the node at `target` in the first document that has one.
///
/// # Errors
///
/// Returns [`Error::NotFound`] carrying the requested line and column when no
/// document has a covering token.
///
/// # Example
///
/// ```
/// use kustomize_yaml_helper::document::{parse_documents, Position};
/// use kustomize_yaml_helper::locate::locate;
///
/// let docs = parse_documents("name: web\n").unwrap();
/// let node = locate(&docs, Position::new(1, 8)).unwrap();
/// assert_eq!(node.token().text(), "web");
/// ```
pub fn locate(documents: &[Node], target: Position) -> Result<&Node> {
    for (index, document) in documents.iter().enumerate() {
        if let Some(found) = last_match(document, target, None) {
            debug!(
                document = index,
                kind = %found.kind(),
                path = found.structural_path(),
                "located node at {}",
                target
            );
            return Ok(found);
        }
    }

    Err(Error::NotFound {
        line: target.line,
        column: target.column,
    })
}

/// Pre-order walk returning the last visited node that covers `target`.
fn last_match<'a>(node: &'a Node, target: Position, found: Option<&'a Node>) -> Option<&'a Node> {
    trace!(kind = %node.kind(), path = node.structural_path(), "visit");
    let found = if node.token().covers(target) {
        Some(node)
    } else {
        found
    };

    node.children()
        .into_iter()
        .fold(found, |found, child| last_match(child, target, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{parse_documents, NodeKind, Token};

    const KUSTOMIZATION: &str = "resources:\n  - ./base/deployment.yaml\n";

    #[test]
    fn test_locate_scalar_value() {
        let docs = parse_documents(KUSTOMIZATION).unwrap();
        let node = locate(&docs, Position::new(2, 10)).unwrap();
        assert_eq!(node.kind(), NodeKind::Scalar);
        assert_eq!(node.token().text(), "./base/deployment.yaml");
        assert_eq!(node.structural_path(), "$.resources[0]");
    }

    #[test]
    fn test_locate_span_edges() {
        let docs = parse_documents(KUSTOMIZATION).unwrap();

        let first = locate(&docs, Position::new(2, 5)).unwrap();
        assert_eq!(first.token().text(), "./base/deployment.yaml");

        let last = locate(&docs, Position::new(2, 26)).unwrap();
        assert_eq!(last.token().text(), "./base/deployment.yaml");

        assert!(locate(&docs, Position::new(2, 27)).is_err());
    }

    #[test]
    fn test_locate_key() {
        let docs = parse_documents(KUSTOMIZATION).unwrap();
        let node = locate(&docs, Position::new(1, 3)).unwrap();
        assert_eq!(node.token().text(), "resources");
        assert_eq!(node.structural_path(), "$.resources");
    }

    #[test]
    fn test_locate_indicators() {
        let docs = parse_documents(KUSTOMIZATION).unwrap();

        let colon = locate(&docs, Position::new(1, 10)).unwrap();
        assert_eq!(colon.kind(), NodeKind::MappingEntry);

        // The block sequence and its first entry share the dash; the entry
        // is visited later and wins.
        let dash = locate(&docs, Position::new(2, 3)).unwrap();
        assert_eq!(dash.kind(), NodeKind::SequenceEntry);
        assert_eq!(dash.structural_path(), "$.resources[0]");
    }

    #[test]
    fn test_locate_missing_line() {
        let docs = parse_documents(KUSTOMIZATION).unwrap();
        match locate(&docs, Position::new(99, 1)) {
            Err(Error::NotFound { line, column }) => {
                assert_eq!(line, 99);
                assert_eq!(column, 1);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_whitespace_is_not_found() {
        let docs = parse_documents(KUSTOMIZATION).unwrap();
        assert!(locate(&docs, Position::new(2, 1)).is_err());
    }

    #[test]
    fn test_locate_falls_through_to_later_document() {
        let docs = parse_documents("a: 1\n---\nb: two\n").unwrap();
        let node = locate(&docs, Position::new(3, 4)).unwrap();
        assert_eq!(node.token().text(), "two");
        assert_eq!(node.structural_path(), "$.b");
    }

    #[test]
    fn test_locate_no_documents() {
        assert!(matches!(
            locate(&[], Position::new(1, 1)),
            Err(Error::NotFound { line: 1, column: 1 })
        ));
    }

    #[test]
    fn test_locate_last_visited_match_wins() {
        // Hand-built tree where a parent and a child cover the same column.
        let child = Node::Scalar {
            token: Token::new("abc", Position::new(1, 1)),
            path: "$.x".to_string(),
        };
        let parent = Node::SequenceEntry {
            token: Token::new("abcdef", Position::new(1, 1)),
            path: "$[0]".to_string(),
            value: Box::new(child),
        };
        let doc = Node::Document {
            token: Token::empty(Position::new(1, 1)),
            path: "$".to_string(),
            body: Some(Box::new(parent)),
        };
        let docs = vec![doc];

        assert_eq!(locate(&docs, Position::new(1, 2)).unwrap().kind(), NodeKind::Scalar);
        assert_eq!(
            locate(&docs, Position::new(1, 5)).unwrap().kind(),
            NodeKind::SequenceEntry
        );
    }
}
