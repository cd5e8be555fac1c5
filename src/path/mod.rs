//! Address formats for located nodes.
//!
//! - [`pointer`] rewrites a structural path (`$.a.b[0]`) into a
//!   slash-separated pointer path (`/a/b/0`).
//! - [`reference`] treats a node's text as a relative file reference and
//!   joins it onto the directory of the source document.

pub mod pointer;
pub mod reference;

pub use pointer::to_pointer_path;
pub use reference::resolve;
