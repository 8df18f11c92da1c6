//! Error taxonomy for taskmux.
//!
//! Three failure families matter operationally: configuration problems
//! (caught before any pane is touched), store problems (fatal for one replay
//! invocation only), and tmux problems (invocation aborts, partially built
//! layouts are left as-is). Hook argument problems get their own variant so
//! the CLI can report a malformed tracker invocation distinctly.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed layout or settings: bad split spec, arity mismatch,
    /// missing config file. Raised before any surface mutation.
    #[error("configuration error: {0}")]
    Config(String),

    /// No pane map has been persisted yet. Callers treat this as
    /// "dashboard not initialized, nothing to replay".
    #[error("pane map not found at {}", path.display())]
    StoreMissing { path: PathBuf },

    /// The persisted pane map exists but cannot be read or decoded.
    #[error("pane store error: {0}")]
    Store(String),

    /// tmux failed, is missing, or returned output that does not match
    /// the expected shape (e.g. a malformed pane id).
    #[error("tmux error: {0}")]
    Tmux(String),

    /// The hook invocation's positional arguments do not match the
    /// task-tracker hook interface.
    #[error("hook error: {0}")]
    Hook(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors that abort before any pane exists, so the caller
    /// knows no cleanup is owed.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_config() {
        assert!(Error::Config("bad".into()).is_config());
        assert!(!Error::Tmux("bad".into()).is_config());
    }

    #[test]
    fn store_missing_names_path() {
        let err = Error::StoreMissing {
            path: PathBuf::from("/tmp/panes.json"),
        };
        assert!(err.to_string().contains("/tmp/panes.json"));
    }
}
