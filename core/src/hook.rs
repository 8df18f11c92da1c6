//! Task-tracker hook interface: invocation detection, argument decoding,
//! and write-command classification.
//!
//! The tracker invokes its on-exit hooks with six positional arguments, each
//! a literal key, a colon, and a value:
//!
//! ```text
//! api:2 args:task done 3 command:done rc:/home/u/.taskrc data:/home/u/.task version:3.0.2
//! ```
//!
//! Six positional arguments is what distinguishes a hook invocation from an
//! interactive launch. Only commands in the write set trigger a replay;
//! everything else is a silent no-op.

use crate::error::{Error, Result};

/// Tracker commands that mutate task data. Compared case-sensitively.
pub const WRITE_COMMANDS: [&str; 18] = [
    "add",
    "annotate",
    "denotate",
    "append",
    "config",
    "delete",
    "done",
    "duplicate",
    "edit",
    "import",
    "log",
    "modify",
    "prepend",
    "start",
    "stop",
    "synchronize",
    "undo",
    "context",
];

/// True when `name` is a mutating tracker command.
pub fn is_write_command(name: &str) -> bool {
    WRITE_COMMANDS.contains(&name)
}

/// Decoded hook invocation arguments, key prefixes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    pub api: String,
    pub args: String,
    pub command: String,
    pub rc_path: String,
    pub data_path: String,
    pub version: String,
}

/// True when an argv (binary name excluded) looks like a hook invocation.
pub fn is_hook_invocation(args: &[String]) -> bool {
    args.len() == 6
}

impl HookContext {
    /// Decode the six positional hook arguments, in their fixed order.
    pub fn parse(args: &[String]) -> Result<HookContext> {
        if args.len() != 6 {
            return Err(Error::Hook(format!(
                "expected 6 hook arguments, got {}",
                args.len()
            )));
        }
        Ok(HookContext {
            api: strip_key(&args[0], "api")?,
            args: strip_key(&args[1], "args")?,
            command: strip_key(&args[2], "command")?,
            rc_path: strip_key(&args[3], "rc")?,
            data_path: strip_key(&args[4], "data")?,
            version: strip_key(&args[5], "version")?,
        })
    }
}

fn strip_key(arg: &str, key: &str) -> Result<String> {
    let prefix = format!("{}:", key);
    arg.strip_prefix(&prefix)
        .map(|v| v.to_string())
        .ok_or_else(|| Error::Hook(format!("expected '{}:<value>', got '{}'", key, arg)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hook_args(command: &str) -> Vec<String> {
        vec![
            "api:2".to_string(),
            format!("args:task {}", command),
            format!("command:{}", command),
            "rc:/home/u/.taskrc".to_string(),
            "data:/home/u/.task".to_string(),
            "version:3.0.2".to_string(),
        ]
    }

    #[test]
    fn write_commands_classified() {
        for cmd in ["add", "done", "modify", "undo", "context", "synchronize"] {
            assert!(is_write_command(cmd), "{} should be a write command", cmd);
        }
    }

    #[test]
    fn read_commands_not_classified() {
        for cmd in ["list", "next", "export", "calendar", "burndown.daily", ""] {
            assert!(!is_write_command(cmd), "{} should not be a write command", cmd);
        }
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert!(!is_write_command("Done"));
        assert!(!is_write_command("ADD"));
    }

    #[test]
    fn six_args_is_hook_mode() {
        assert!(is_hook_invocation(&hook_args("done")));
        assert!(!is_hook_invocation(&[]));
        assert!(!is_hook_invocation(&["--config".into(), "x.yml".into()]));
    }

    #[test]
    fn parses_hook_context() {
        let ctx = HookContext::parse(&hook_args("done")).unwrap();
        assert_eq!(ctx.api, "2");
        assert_eq!(ctx.args, "task done");
        assert_eq!(ctx.command, "done");
        assert_eq!(ctx.rc_path, "/home/u/.taskrc");
        assert_eq!(ctx.data_path, "/home/u/.task");
        assert_eq!(ctx.version, "3.0.2");
    }

    #[test]
    fn value_may_contain_colons() {
        let mut args = hook_args("done");
        args[3] = "rc:C:/Users/u/.taskrc".to_string();
        let ctx = HookContext::parse(&args).unwrap();
        assert_eq!(ctx.rc_path, "C:/Users/u/.taskrc");
    }

    #[test]
    fn wrong_key_order_rejected() {
        let mut args = hook_args("done");
        args.swap(0, 2);
        assert!(HookContext::parse(&args).is_err());
    }

    #[test]
    fn wrong_arity_rejected() {
        let args = hook_args("done");
        assert!(HookContext::parse(&args[..5]).is_err());
    }
}
