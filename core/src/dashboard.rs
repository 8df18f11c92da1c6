//! Dashboard launch pipeline.
//!
//! The initial layout pass: create the detached session, split its first pane
//! into the configured tree, start every command, persist the pane map, then
//! attach. If the session already exists the launch degrades to a plain
//! attach so a second invocation never rebuilds the surface.
//!
//! A failure mid-pass aborts the invocation and leaves any panes created so
//! far in place; there is no rollback.

use crate::error::Result;
use crate::layout::node::LayoutNode;
use crate::layout::splitter;
use crate::marker::{self, MarkedCommand};
use crate::store::PaneStore;
use crate::tmux::Surface;
use crate::types::config::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session already existed; we only attached.
    AlreadyRunning,
    /// Fresh layout built with this many panes.
    Launched { panes: usize },
}

/// Build the dashboard from `layout` and attach to it.
pub fn launch(
    surface: &dyn Surface,
    settings: &Settings,
    layout: &LayoutNode,
    store: &PaneStore,
) -> Result<Outcome> {
    if surface.session_exists(&settings.session)? {
        log::info!("session '{}' already running, attaching", settings.session);
        surface.attach(&settings.session)?;
        return Ok(Outcome::AlreadyRunning);
    }

    let root =
        surface.create_session(&settings.session, settings.width, settings.height, None)?;
    let map = splitter::split_tree(surface, layout, &root)?;

    for (pane, raw) in &map {
        let marked = MarkedCommand::parse(raw);
        if marked.select_on_create {
            surface.focus(pane)?;
        }
        let command = marker::sanitize(&marked.command, &settings.task_binary);
        surface.send_text(pane, &command)?;
    }

    // Persist the raw marked strings, not what was sent: replay re-checks
    // the `!` marker against this snapshot.
    store.save(&map)?;
    log::info!("dashboard '{}' launched with {} pane(s)", settings.session, map.len());

    surface.attach(&settings.session)?;
    Ok(Outcome::Launched { panes: map.len() })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
