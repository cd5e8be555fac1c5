//! kustomize-yaml-helper - find the YAML node under a cursor.
//!
//! Given a YAML document and a 1-based (line, column), the crate finds the
//! most deeply nested node whose own token sits at that position and reports
//! it in one of three forms:
//!
//! - `resolve`: the node's text joined onto the source document's directory
//! - `json-path`: the node's structural path, e.g. `$.resources[0]`
//! - `patch-path`: the same path as a pointer, e.g. `/resources/0`
//!
//! # Example
//!
//! ```
//! use kustomize_yaml_helper::document::Position;
//! use kustomize_yaml_helper::query::{run, Action, Query};
//!
//! let yaml = "resources:\n  - ./base/deployment.yaml\n";
//! let query = Query::new(Position::new(2, 10), Action::Resolve);
//! let out = run(yaml, "/tmp/kustomization.yaml", &query).unwrap();
//! assert_eq!(out, "/tmp/base/deployment.yaml");
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod locate;
pub mod path;
pub mod query;

pub use error::{Error, Result};
