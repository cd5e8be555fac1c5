//! Document tree for parsed YAML.
//!
//! This module provides the position-aware tree the lookups run over:
//! tokens with 1-based coordinates, the closed set of node kinds, and the
//! yaml-rust2 based parser that builds one tree per document.

pub mod node;
pub mod parser;
pub mod source;
pub mod token;

pub use node::{Node, NodeKind};
pub use parser::parse_documents;
pub use token::{Position, Token};
