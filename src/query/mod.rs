//! The lookup pipeline: parse, locate, format.
//!
//! Each call does exactly one parse, one lookup and one formatting step and
//! returns the single output line. Nothing is written here; printing is left
//! to the caller so a failed lookup never produces partial output.
//!
//! # Example
//!
//! ```
//! use kustomize_yaml_helper::document::Position;
//! use kustomize_yaml_helper::query::{run, Action, Query};
//!
//! let yaml = "resources:\n  - ./base/deployment.yaml\n";
//! let query = Query::new(Position::new(2, 10), Action::PatchPath);
//! assert_eq!(run(yaml, "/tmp/kustomization.yaml", &query).unwrap(), "/resources/0");
//! ```

use crate::document::{parse_documents, Node, Position};
use crate::error::Result;
use crate::locate::locate;
use crate::path::{resolve, to_pointer_path};
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

/// What to print for the located node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// The file the node's text refers to, relative to the source document.
    Resolve,
    /// The node's structural path (`$.a[0]`).
    JsonPath,
    /// The node's pointer path (`/a/0`).
    PatchPath,
}

impl Action {
    /// Formats `node` for this action.
    pub fn apply(&self, source_name: &str, node: &Node) -> String {
        match self {
            Action::Resolve => resolve(source_name, node),
            Action::JsonPath => node.structural_path().to_string(),
            Action::PatchPath => to_pointer_path(node.structural_path()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// A cursor position and what to report about the node under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub position: Position,
    pub action: Action,
}

impl Query {
    pub fn new(position: Position, action: Action) -> Self {
        Self { position, action }
    }
}

/// Runs `query` against `content`.
///
/// `source_name` is the path references are resolved against; for stdin
/// input it is the caller-supplied virtual name.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] for invalid YAML and
/// [`crate::Error::NotFound`] when nothing sits at the position.
pub fn run(content: &str, source_name: &str, query: &Query) -> Result<String> {
    let documents = parse_documents(content)?;
    let node = locate(&documents, query.position)?;
    let output = query.action.apply(source_name, node);
    debug!(action = %query.action, %output, "formatted node");
    Ok(output)
}
