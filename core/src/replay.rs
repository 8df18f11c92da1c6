//! Replay controller.
//!
//! Runs once per hook invocation, as a short-lived process: Idle until a
//! mutating tracker command arrives, Replaying while the persisted map is
//! walked, back to Idle (process exit) afterwards. The guards run in a fixed
//! order so that deliberate no-ops never touch the store:
//!
//! 1. non-mutating command: done, nothing read;
//! 2. no active dashboard session: done, nothing read;
//! 3. no persisted map yet: the dashboard has never launched, done;
//! 4. otherwise re-send every non-suppressed command to its pane.
//!
//! A load failure other than "missing" is fatal for this invocation but
//! leaves the store untouched.

use crate::error::{Error, Result};
use crate::hook;
use crate::marker::{self, MarkedCommand};
use crate::store::PaneStore;
use crate::tmux::Surface;
use crate::types::config::Settings;

/// What a hook invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tracker command does not mutate task data.
    NotMutating,
    /// No dashboard session is active; nothing to refresh.
    NoSession,
    /// No layout pass has ever persisted a map.
    NotInitialized,
    /// Commands re-sent, suppressed entries skipped.
    Replayed { sent: usize, skipped: usize },
}

/// Handle one hook invocation for tracker command `command_name`.
pub fn run(
    surface: &dyn Surface,
    settings: &Settings,
    store: &PaneStore,
    command_name: &str,
) -> Result<Outcome> {
    if !hook::is_write_command(command_name) {
        log::debug!("'{}' is not a write command, skipping replay", command_name);
        return Ok(Outcome::NotMutating);
    }
    if !surface.session_exists(&settings.session)? {
        log::debug!("session '{}' not active, skipping replay", settings.session);
        return Ok(Outcome::NoSession);
    }

    let map = match store.load() {
        Ok(map) => map,
        Err(Error::StoreMissing { .. }) => return Ok(Outcome::NotInitialized),
        Err(e) => return Err(e),
    };

    let mut sent = 0;
    let mut skipped = 0;
    for (pane, raw) in &map {
        let marked = MarkedCommand::parse(raw);
        if marked.suppress_replay {
            skipped += 1;
            continue;
        }
        let command = marker::sanitize(&marked.command, &settings.task_binary);
        surface.send_text(pane, &command)?;
        sent += 1;
    }
    log::info!(
        "replayed {} pane(s) for '{}', {} suppressed",
        sent,
        command_name,
        skipped
    );
    Ok(Outcome::Replayed { sent, skipped })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
