//! Pane-command store: durable snapshot of pane id to marked command.
//!
//! The launch pass writes the whole map; hook invocations read it back.
//! Every save is a full overwrite, there is no merge or append. Nothing
//! locks the file: a save racing a load is accepted with last-writer-wins
//! semantics, which matches the single-writer-per-cycle usage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tmux::PaneId;

/// Flat mapping from pane id to marked command string, as persisted.
/// Ordered so iteration (and therefore send order) is deterministic.
pub type PaneCommandMap = BTreeMap<PaneId, String>;

pub struct PaneStore {
    path: PathBuf,
}

impl PaneStore {
    pub fn new(path: impl Into<PathBuf>) -> PaneStore {
        PaneStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a full snapshot, replacing any prior content.
    pub fn save(&self, map: &PaneCommandMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| Error::Store(format!("failed to encode pane map: {}", e)))?;
        fs::write(&self.path, json)?;
        log::debug!("saved {} pane entries to {}", map.len(), self.path.display());
        Ok(())
    }

    /// Load the last snapshot.
    ///
    /// Returns [`Error::StoreMissing`] when no layout pass has run yet;
    /// callers treat that as "dashboard not initialized, nothing to replay".
    pub fn load(&self) -> Result<PaneCommandMap> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::StoreMissing {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text).map_err(|e| {
            Error::Store(format!(
                "failed to decode pane map at {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
