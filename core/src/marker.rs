//! Command marker protocol and command sanitization.
//!
//! Leaf commands may carry two leading single-character markers:
//!
//! - `*` selects (focuses) the pane once, at initial layout time only;
//! - `!` suppresses the command on hook-triggered replay. The first send at
//!   layout time always happens.
//!
//! `*` is recognized only at position 0; `!` at position 0 after any `*` has
//! been stripped. The store always persists the original marked string, so
//! replay re-evaluates `!` against the persisted form on every cycle. Markers
//! live in one tagged value here rather than in prefix checks scattered
//! across components.

/// A command string with its markers decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedCommand {
    /// The bare command, both markers stripped.
    pub command: String,
    /// `*`: focus this pane once when the layout is first built.
    pub select_on_create: bool,
    /// `!`: never re-issue this command on replay.
    pub suppress_replay: bool,
}

impl MarkedCommand {
    /// Decode a raw (persisted or configured) command string.
    pub fn parse(raw: &str) -> MarkedCommand {
        let (select_on_create, rest) = match raw.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (suppress_replay, command) = match rest.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        MarkedCommand {
            command: command.to_string(),
            select_on_create,
            suppress_replay,
        }
    }

    /// Re-serialize to the stored form, markers in `*` then `!` order.
    pub fn to_stored(&self) -> String {
        let mut out = String::new();
        if self.select_on_create {
            out.push('*');
        }
        if self.suppress_replay {
            out.push('!');
        }
        out.push_str(&self.command);
        out
    }
}

/// Inject run-control overrides when `command` invokes the task binary.
///
/// Forces label verbosity (stable pane output) and disables hooks so the
/// dashboard's own refresh commands cannot re-trigger the hook that caused
/// them. Commands not starting with the task binary pass through untouched.
pub fn sanitize(command: &str, task_binary: &str) -> String {
    let trimmed = command.trim_start();
    let first = trimmed.split_whitespace().next().unwrap_or("");
    if first != task_binary {
        return command.to_string();
    }
    let rest = trimmed[first.len()..].trim_start();
    if rest.is_empty() {
        format!("{} rc.verbose=label rc.hooks=off", first)
    } else {
        format!("{} rc.verbose=label rc.hooks=off {}", first, rest)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_command_has_no_flags() {
        let m = MarkedCommand::parse("task next");
        assert_eq!(m.command, "task next");
        assert!(!m.select_on_create);
        assert!(!m.suppress_replay);
    }

    #[test]
    fn star_sets_select() {
        let m = MarkedCommand::parse("*task calendar");
        assert_eq!(m.command, "task calendar");
        assert!(m.select_on_create);
        assert!(!m.suppress_replay);
    }

    #[test]
    fn bang_sets_suppress() {
        let m = MarkedCommand::parse("!task burndown.daily");
        assert_eq!(m.command, "task burndown.daily");
        assert!(m.suppress_replay);
        assert!(!m.select_on_create);
    }

    #[test]
    fn star_then_bang_sets_both() {
        let m = MarkedCommand::parse("*!htop");
        assert_eq!(m.command, "htop");
        assert!(m.select_on_create);
        assert!(m.suppress_replay);
    }

    #[test]
    fn bang_then_star_leaves_star_in_command() {
        // Only `*` at position 0 is a marker; after `!` it is literal text.
        let m = MarkedCommand::parse("!*odd");
        assert_eq!(m.command, "*odd");
        assert!(m.suppress_replay);
        assert!(!m.select_on_create);
    }

    #[test]
    fn parse_is_noop_on_unmarked_strings() {
        let m = MarkedCommand::parse("watch date");
        assert_eq!(m.to_stored(), "watch date");
    }

    #[test]
    fn stored_form_round_trips() {
        for raw in ["cmd", "*cmd", "!cmd", "*!cmd"] {
            assert_eq!(MarkedCommand::parse(raw).to_stored(), raw);
        }
    }

    #[test]
    fn interior_markers_are_literal() {
        let m = MarkedCommand::parse("echo *glob !bang");
        assert_eq!(m.command, "echo *glob !bang");
        assert!(!m.select_on_create);
        assert!(!m.suppress_replay);
    }

    #[test]
    fn sanitize_injects_rc_overrides_after_task() {
        assert_eq!(
            sanitize("task next", "task"),
            "task rc.verbose=label rc.hooks=off next"
        );
        assert_eq!(
            sanitize("task", "task"),
            "task rc.verbose=label rc.hooks=off"
        );
    }

    #[test]
    fn sanitize_leaves_other_commands_alone() {
        assert_eq!(sanitize("htop", "task"), "htop");
        assert_eq!(sanitize("taskwarrior-tui", "task"), "taskwarrior-tui");
        assert_eq!(sanitize("watch task next", "task"), "watch task next");
    }
}
