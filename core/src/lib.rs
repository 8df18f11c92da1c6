//! taskmux-core: domain logic for the taskwarrior tmux dashboard.
//!
//! A dashboard is a tmux session whose panes each run one long-lived command,
//! arranged by a declarative nested split layout. After every mutating
//! taskwarrior operation (signalled through an on-exit hook) the panes are
//! refreshed by re-sending their stored commands.
//!
//! The crate is organized leaves-first: `layout` turns the configured tree
//! into ordered split calls and a flat pane map, `marker` decodes the `*` and
//! `!` command prefixes, `store` persists the map between processes, and
//! `replay` / `dashboard` drive the two invocation modes through the `tmux`
//! surface port.

pub mod dashboard;
pub mod error;
pub mod hook;
pub mod layout;
pub mod marker;
pub mod replay;
pub mod store;
pub mod tmux;
pub mod types;

pub use error::{Error, Result};
