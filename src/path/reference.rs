//! Lexical resolution of file references.
//!
//! Joining follows slash-separated path rules regardless of platform: the
//! directory of the source name is joined with the node text and the result
//! is cleaned (`.` dropped, `..` collapsed, repeated slashes merged). Nothing
//! touches the filesystem.

use crate::document::Node;
use tracing::debug;

/// Joins `node`'s text onto the directory of `source_path`.
///
/// # Example
///
/// ```
/// use kustomize_yaml_helper::document::{Node, Position, Token};
/// use kustomize_yaml_helper::path::resolve;
///
/// let node = Node::Scalar {
///     token: Token::new("./base/deployment.yaml", Position::new(2, 5)),
///     path: "$.resources[0]".to_string(),
/// };
/// assert_eq!(resolve("/tmp/kustomization.yaml", &node), "/tmp/base/deployment.yaml");
/// ```
pub fn resolve(source_path: &str, node: &Node) -> String {
    let resolved = join(&dir(source_path), node.token().text());
    debug!(source = source_path, reference = node.token().text(), %resolved, "resolved reference");
    resolved
}

/// Everything before the last `/`, cleaned. A name without a slash lives in `.`.
fn dir(path: &str) -> String {
    match path.rfind('/') {
        Some(split) => clean(&path[..split + 1]),
        None => ".".to_string(),
    }
}

fn join(base: &str, reference: &str) -> String {
    match (base.is_empty(), reference.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean(reference),
        (false, true) => clean(base),
        (false, false) => clean(&format!("{}/{}", base, reference)),
    }
}

/// Shortest lexically equivalent form of a slash-separated path.
fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root is dropped; relative paths keep it.
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
