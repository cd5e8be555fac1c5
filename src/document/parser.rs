//! YAML parsing into position-aware document trees.
//!
//! The parser drives yaml-rust2's event stream with a [`MarkedEventReceiver`]
//! and assembles one [`Node::Document`] per document in the stream. Paths are
//! assigned top-down as each node starts: the enclosing frame on the builder
//! stack already knows the key or index a new child is reached by.
//!
//! # Example
//!
//! ```
//! use kustomize_yaml_helper::document::parser::parse_documents;
//!
//! let docs = parse_documents("a: 1\n---\nb: 2\n").unwrap();
//! assert_eq!(docs.len(), 2);
//! ```

use super::node::Node;
use super::source::SourceText;
use super::token::Token;
use crate::error::{Error, Result};
use tracing::{debug, trace, warn};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;

/// Parses every document in `content`.
///
/// # Errors
///
/// Returns [`Error::Parse`] with the scanner's message if the input is not
/// valid YAML.
pub fn parse_documents(content: &str) -> Result<Vec<Node>> {
    // A byte order mark is not part of the first line's text.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::new(content);

    parser
        .load(&mut builder, true)
        .map_err(|err| Error::Parse {
            message: err.to_string(),
        })?;

    let documents = builder.documents;
    debug!(documents = documents.len(), "parsed YAML stream");
    Ok(documents)
}

/// A node still receiving children.
enum Frame {
    Document {
        token: Token,
        body: Option<Node>,
    },
    Mapping {
        token: Token,
        path: String,
        start: usize,
        entries: Vec<Node>,
        /// Start index of the first key. Block mappings report their start
        /// at the first `:`, so this is where the mapping's text begins.
        first_key: Option<usize>,
        /// Completed key waiting for its value, with its start index.
        pending_key: Option<(Node, usize)>,
    },
    Sequence {
        token: Token,
        path: String,
        start: usize,
        entries: Vec<Node>,
    },
}

struct TreeBuilder {
    source: SourceText,
    stack: Vec<Frame>,
    documents: Vec<Node>,
}

impl TreeBuilder {
    fn new(content: &str) -> Self {
        Self {
            source: SourceText::new(content),
            stack: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Path of the next node to start under the current frame.
    fn child_path(&self, own_text: &str) -> String {
        match self.stack.last() {
            Some(Frame::Sequence { path, entries, .. }) => {
                format!("{}[{}]", path, entries.len())
            }
            Some(Frame::Mapping {
                pending_key: Some((key, _)),
                ..
            }) => key.structural_path().to_string(),
            Some(Frame::Mapping {
                path,
                pending_key: None,
                ..
            }) => format!("{}.{}", path, key_segment(own_text)),
            Some(Frame::Document { .. }) | None => "$".to_string(),
        }
    }

    fn token_at(&self, text: impl Into<String>, index: usize) -> Token {
        Token::new(text, self.source.position(index))
    }

    fn empty_token_at(&self, index: usize) -> Token {
        Token::empty(self.source.position(index))
    }

    /// Text for a scalar event. The parser reports missing values as `~`;
    /// those have no source text of their own.
    fn scalar_text(&self, value: String, index: usize) -> String {
        if value == "~" && self.source.char_at(index) != Some('~') {
            String::new()
        } else {
            value
        }
    }

    fn alias_text(&self, index: usize) -> String {
        if self.source.char_at(index) != Some('*') {
            return String::new();
        }
        self.source
            .take_while(index, |c| !c.is_whitespace() && !",[]{}".contains(c))
    }

    /// Attaches a finished node to the frame on top of the stack.
    fn push_complete(&mut self, node: Node, start: usize) {
        let source = &self.source;
        match self.stack.last_mut() {
            Some(Frame::Document { body, .. }) => *body = Some(node),
            Some(Frame::Sequence { token, entries, .. }) => {
                let dash = dash_token(source, token, &node, start);
                entries.push(Node::SequenceEntry {
                    token: dash,
                    path: node.structural_path().to_string(),
                    value: Box::new(node),
                });
            }
            Some(Frame::Mapping {
                entries,
                first_key,
                pending_key,
                ..
            }) => match pending_key.take() {
                None => {
                    first_key.get_or_insert(start);
                    *pending_key = Some((node, start));
                }
                Some((key, key_start)) => {
                    let colon = colon_token(source, &key, key_start);
                    entries.push(Node::MappingEntry {
                        token: colon,
                        path: key.structural_path().to_string(),
                        key: Box::new(key),
                        value: Box::new(node),
                    });
                }
            },
            None => warn!("dropping node outside of any document"),
        }
    }
}

/// Path segment for a mapping key. Keys that would read as path syntax are
/// single-quoted, with embedded quotes doubled.
fn key_segment(key: &str) -> String {
    if key.contains(|c: char| matches!(c, '.' | '[' | ']' | '$' | '*' | '\'')) {
        format!("'{}'", key.replace('\'', "''"))
    } else {
        key.to_string()
    }
}

/// The `:` indicator after a scalar key, if it sits on the key's line.
fn colon_token(source: &SourceText, key: &Node, key_start: usize) -> Token {
    if key.is_scalar() {
        let key_end = source.scalar_end(key_start, key.token().len());
        if let Some(colon) = source.find_forward_on_line(key_end, ':') {
            return Token::new(":", source.position(colon));
        }
    }
    Token::empty(key.token().position())
}

/// The `-` indicator in front of a block sequence item. Flow items have none.
fn dash_token(source: &SourceText, sequence: &Token, item: &Node, item_start: usize) -> Token {
    if sequence.text() != "[" {
        if let Some(dash) = source.find_backward(item_start, '-') {
            return Token::new("-", source.position(dash));
        }
    }
    Token::empty(item.token().position())
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        let index = marker.index();
        match ev {
            Event::Nothing | Event::StreamStart | Event::StreamEnd => {}

            Event::DocumentStart => {
                let token = if self.source.starts_with_at(index, "---") {
                    self.token_at("---", index)
                } else {
                    self.empty_token_at(index)
                };
                self.stack.push(Frame::Document { token, body: None });
            }

            Event::DocumentEnd => match self.stack.pop() {
                Some(Frame::Document { token, body }) => {
                    self.documents.push(Node::Document {
                        token,
                        path: "$".to_string(),
                        body: body.map(Box::new),
                    });
                }
                Some(_) => warn!("document ended inside an open collection"),
                None => warn!("document end without a document start"),
            },

            Event::Scalar(value, ..) => {
                let text = self.scalar_text(value, index);
                let token = self.token_at(text, index);
                let path = self.child_path(token.text());
                trace!(%path, text = token.text(), "scalar");
                self.push_complete(Node::Scalar { token, path }, index);
            }

            Event::Alias(..) => {
                let token = self.token_at(self.alias_text(index), index);
                let path = self.child_path(token.text());
                self.push_complete(Node::Scalar { token, path }, index);
            }

            Event::SequenceStart(..) => {
                let token = match self.source.char_at(index) {
                    Some('[') => self.token_at("[", index),
                    Some('-') => self.token_at("-", index),
                    _ => self.empty_token_at(index),
                };
                let path = self.child_path(token.text());
                self.stack.push(Frame::Sequence {
                    token,
                    path,
                    start: index,
                    entries: Vec::new(),
                });
            }

            Event::SequenceEnd => match self.stack.pop() {
                Some(Frame::Sequence {
                    token,
                    path,
                    start,
                    entries,
                }) => {
                    trace!(%path, entries = entries.len(), "sequence");
                    self.push_complete(
                        Node::Sequence {
                            token,
                            path,
                            entries,
                        },
                        start,
                    );
                }
                Some(frame) => {
                    warn!("sequence end did not match the open frame");
                    self.stack.push(frame);
                }
                None => warn!("sequence end without a sequence start"),
            },

            Event::MappingStart(..) => {
                let token = match self.source.char_at(index) {
                    Some('{') => self.token_at("{", index),
                    _ => self.empty_token_at(index),
                };
                let path = self.child_path(token.text());
                self.stack.push(Frame::Mapping {
                    token,
                    path,
                    start: index,
                    entries: Vec::new(),
                    first_key: None,
                    pending_key: None,
                });
            }

            Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Mapping {
                    token,
                    path,
                    start,
                    entries,
                    first_key,
                    pending_key,
                }) => {
                    if pending_key.is_some() {
                        warn!(%path, "mapping ended with a key but no value");
                    }
                    trace!(%path, entries = entries.len(), "mapping");
                    self.push_complete(
                        Node::Mapping {
                            token,
                            path,
                            entries,
                        },
                        first_key.unwrap_or(start),
                    );
                }
                Some(frame) => {
                    warn!("mapping end did not match the open frame");
                    self.stack.push(frame);
                }
                None => warn!("mapping end without a mapping start"),
            },
        }
    }
}
