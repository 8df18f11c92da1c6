//! taskmux CLI entry point.
//!
//! Two invocation modes share one binary:
//!
//! - **interactive**: `taskmux [--config <layout.yml>]` builds (or attaches
//!   to) the dashboard;
//! - **hook**: exactly six positional `key:value` arguments, as passed by the
//!   taskwarrior on-exit hook, trigger a replay check.
//!
//! Exit code 0 covers success and every deliberate no-op (already running,
//! non-mutating command, no active session, dashboard never launched);
//! anything fatal prints one line to stderr and exits 1.

use std::path::PathBuf;
use std::process;

use taskmux_core::dashboard;
use taskmux_core::error::Error;
use taskmux_core::hook::{self, HookContext};
use taskmux_core::layout::node::LayoutNode;
use taskmux_core::replay;
use taskmux_core::store::PaneStore;
use taskmux_core::tmux::Tmux;
use taskmux_core::types::config::Settings;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("taskmux: {}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Error> {
    let settings = Settings::default();
    let tmux = Tmux::default();
    let store = PaneStore::new(settings.store_path());

    if hook::is_hook_invocation(args) {
        let ctx = HookContext::parse(args)?;
        let outcome = replay::run(&tmux, &settings, &store, &ctx.command)?;
        log::debug!("hook '{}': {:?}", ctx.command, outcome);
        return Ok(());
    }

    let layout_path = parse_interactive_args(args, &settings)?;
    let text = std::fs::read_to_string(&layout_path).map_err(|e| {
        Error::Config(format!(
            "cannot read layout file {}: {}",
            layout_path.display(),
            e
        ))
    })?;
    let layout = LayoutNode::from_yaml(&text)?;
    dashboard::launch(&tmux, &settings, &layout, &store)?;
    Ok(())
}

/// Interactive mode takes one optional `--config <path>` flag.
fn parse_interactive_args(args: &[String], settings: &Settings) -> Result<PathBuf, Error> {
    match args {
        [] => Ok(settings.layout_path()),
        [flag, path] if flag == "--config" || flag == "-c" => Ok(PathBuf::from(path)),
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{}", USAGE);
            process::exit(0);
        }
        _ => Err(Error::Config(format!(
            "unrecognized arguments: {}\n{}",
            args.join(" "),
            USAGE
        ))),
    }
}

const USAGE: &str = "\
Usage: taskmux [--config <layout.yml>]

Builds a tmux dashboard from the layout file and attaches to it. When
invoked by the taskwarrior on-exit hook (six key:value arguments), refreshes
the dashboard panes instead.";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_default_layout_path() {
        let settings = Settings::default();
        let path = parse_interactive_args(&[], &settings).unwrap();
        assert_eq!(path, settings.layout_path());
    }

    #[test]
    fn config_flag_overrides_layout_path() {
        let settings = Settings::default();
        let args = vec!["--config".to_string(), "/tmp/lay.yml".to_string()];
        let path = parse_interactive_args(&args, &settings).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/lay.yml"));
    }

    #[test]
    fn unknown_flag_is_config_error() {
        let settings = Settings::default();
        let args = vec!["--frobnicate".to_string()];
        assert!(parse_interactive_args(&args, &settings).is_err());
    }
}
