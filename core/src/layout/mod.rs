//! Layout engine: split grammar, layout tree, and pane tree splitter.
//!
//! The `spec` module parses one split-spec string into axis, sizes, and the
//! pivot index. The `node` module builds the nested layout tree from the YAML
//! configuration. The `splitter` module walks that tree against a live
//! surface, issuing ordered split calls and producing the flat
//! pane-to-command map that gets persisted.

pub mod node;
pub mod spec;
pub mod splitter;
