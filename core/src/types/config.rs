use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// tmux session name the dashboard lives in. Default: "taskmux".
    #[serde(default = "default_session")]
    pub session: String,
    /// Width in cells for the detached session. Default: 200.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in cells for the detached session. Default: 50.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Name of the task-tracker binary, matched against the first word of
    /// each command for sanitization. Default: "task".
    #[serde(default = "default_task_binary")]
    pub task_binary: String,
    /// Directory holding the layout file and the persisted pane map.
    #[serde(default = "resolve_config_dir")]
    pub config_dir: PathBuf,
}

fn default_session() -> String {
    "taskmux".to_string()
}

fn default_width() -> u32 {
    200
}

fn default_height() -> u32 {
    50
}

fn default_task_binary() -> String {
    "task".to_string()
}

/// `TASKMUX_CONFIG_DIR` overrides; otherwise `$HOME/.config/taskmux`.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TASKMUX_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("taskmux")
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            session: default_session(),
            width: default_width(),
            height: default_height(),
            task_binary: default_task_binary(),
            config_dir: resolve_config_dir(),
        }
    }
}

impl Settings {
    /// The layout configuration file (read-only, YAML).
    pub fn layout_path(&self) -> PathBuf {
        self.config_dir.join("layout.yml")
    }

    /// The persisted pane-command map (full snapshot, JSON).
    pub fn store_path(&self) -> PathBuf {
        self.config_dir.join("panes.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let s = Settings::default();
        assert_eq!(s.session, "taskmux");
        assert_eq!(s.task_binary, "task");
        assert!(s.width > 0 && s.height > 0);
    }

    #[test]
    fn paths_hang_off_config_dir() {
        let s = Settings {
            config_dir: PathBuf::from("/etc/taskmux"),
            ..Settings::default()
        };
        assert_eq!(s.layout_path(), PathBuf::from("/etc/taskmux/layout.yml"));
        assert_eq!(s.store_path(), PathBuf::from("/etc/taskmux/panes.json"));
    }
}
