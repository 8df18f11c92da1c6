//! tmux surface port and adapter.
//!
//! The engine never talks to tmux directly; it goes through the narrow
//! [`Surface`] trait so layout and replay logic stay testable without a live
//! server. [`Tmux`] is the one concrete adapter: it shells out to the tmux
//! binary, asks pane-creating calls to print `#{pane_id}`, and validates the
//! returned token against the expected percent-digits pattern instead of
//! propagating scraped garbage.
//!
//! All calls are blocking and synchronous. Nothing is retried; a failed or
//! hung tmux fails or hangs the whole invocation.

use std::fmt;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::spec::Axis;

/// Opaque identifier for one tmux pane, e.g. `%0` or `%17`.
///
/// tmux guarantees uniqueness for the lifetime of the server; we only
/// validate the textual shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(String);

impl PaneId {
    /// Validate a raw token against the `%<digits>` pattern.
    pub fn parse(raw: &str) -> Result<PaneId> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('%')
            .ok_or_else(|| Error::Tmux(format!("malformed pane id: '{}'", trimmed)))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Tmux(format!("malformed pane id: '{}'", trimmed)));
        }
        Ok(PaneId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a split inserts the new pane before (above/left of) or after
/// (below/right of) the target pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// The surface-management operations the engine consumes.
pub trait Surface {
    /// Create a detached session sized `width` x `height`, optionally running
    /// `command` in its first pane. Returns that pane's id.
    fn create_session(
        &self,
        name: &str,
        width: u32,
        height: u32,
        command: Option<&str>,
    ) -> Result<PaneId>;

    /// Split `target` along `axis`, giving the new pane `size` cells.
    fn split(&self, target: &PaneId, axis: Axis, size: u32, placement: Placement)
        -> Result<PaneId>;

    /// Focus (select) a pane.
    fn focus(&self, pane: &PaneId) -> Result<()>;

    /// Type `text` into a pane and press Enter.
    fn send_text(&self, pane: &PaneId, text: &str) -> Result<()>;

    fn session_exists(&self, name: &str) -> Result<bool>;

    /// Attach the calling terminal to a session. Blocks until detach.
    fn attach(&self, name: &str) -> Result<()>;
}

/// Adapter that drives a real tmux binary.
pub struct Tmux {
    binary: String,
}

impl Default for Tmux {
    fn default() -> Self {
        Tmux::new("tmux")
    }
}

impl Tmux {
    pub fn new(binary: &str) -> Tmux {
        Tmux {
            binary: binary.to_string(),
        }
    }

    /// Run a tmux subcommand, failing on non-zero exit, returning stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        log::debug!("tmux {}", args.join(" "));
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| Error::Tmux(format!("failed to run {}: {}", self.binary, e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Tmux(format!(
                "tmux {} failed: {}",
                args.first().unwrap_or(&""),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a tmux subcommand that prints a pane id on stdout.
    fn run_for_pane(&self, args: &[&str]) -> Result<PaneId> {
        let out = self.run(args)?;
        PaneId::parse(&out)
    }
}

impl Surface for Tmux {
    fn create_session(
        &self,
        name: &str,
        width: u32,
        height: u32,
        command: Option<&str>,
    ) -> Result<PaneId> {
        let width = width.to_string();
        let height = height.to_string();
        let mut args = vec![
            "new-session",
            "-d",
            "-s",
            name,
            "-x",
            width.as_str(),
            "-y",
            height.as_str(),
            "-P",
            "-F",
            "#{pane_id}",
        ];
        if let Some(cmd) = command {
            args.push(cmd);
        }
        self.run_for_pane(&args)
    }

    fn split(
        &self,
        target: &PaneId,
        axis: Axis,
        size: u32,
        placement: Placement,
    ) -> Result<PaneId> {
        let size = size.to_string();
        let mut args = vec![
            "split-window",
            "-d",
            "-t",
            target.as_str(),
            axis.tmux_flag(),
            "-l",
            size.as_str(),
        ];
        if placement == Placement::Before {
            args.push("-b");
        }
        args.extend(["-P", "-F", "#{pane_id}"]);
        self.run_for_pane(&args)
    }

    fn focus(&self, pane: &PaneId) -> Result<()> {
        self.run(&["select-pane", "-t", pane.as_str()])?;
        Ok(())
    }

    fn send_text(&self, pane: &PaneId, text: &str) -> Result<()> {
        self.run(&["send-keys", "-t", pane.as_str(), text, "Enter"])?;
        Ok(())
    }

    fn session_exists(&self, name: &str) -> Result<bool> {
        // has-session exits non-zero for "no such session", which is an
        // answer, not a failure.
        let status = Command::new(&self.binary)
            .args(["has-session", "-t", name])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::Tmux(format!("failed to run {}: {}", self.binary, e)))?;
        Ok(status.success())
    }

    fn attach(&self, name: &str) -> Result<()> {
        // Inherit stdio so the user lands inside the session.
        let status = Command::new(&self.binary)
            .args(["attach-session", "-t", name])
            .status()
            .map_err(|e| Error::Tmux(format!("failed to run {}: {}", self.binary, e)))?;
        if !status.success() {
            return Err(Error::Tmux(format!("attach to '{}' failed", name)));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_id_accepts_percent_digits() {
        assert_eq!(PaneId::parse("%0").unwrap().as_str(), "%0");
        assert_eq!(PaneId::parse("%42").unwrap().as_str(), "%42");
        // Trailing newline from tmux stdout is tolerated.
        assert_eq!(PaneId::parse("%7\n").unwrap().as_str(), "%7");
    }

    #[test]
    fn pane_id_rejects_malformed_tokens() {
        assert!(PaneId::parse("").is_err());
        assert!(PaneId::parse("%").is_err());
        assert!(PaneId::parse("0").is_err());
        assert!(PaneId::parse("%1a").is_err());
        assert!(PaneId::parse("pane-1").is_err());
    }

    #[test]
    fn pane_id_display_round_trips() {
        let id = PaneId::parse("%3").unwrap();
        assert_eq!(format!("{}", id), "%3");
    }

    #[test]
    fn pane_id_serializes_as_plain_string() {
        let id = PaneId::parse("%5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"%5\"");
        let back: PaneId = serde_json::from_str("\"%5\"").unwrap();
        assert_eq!(back, id);
    }
}
