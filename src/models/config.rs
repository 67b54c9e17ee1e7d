use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::task::{all_done, Task};

pub const DEFAULT_DONE_ICON: &str = "✅";
pub const DEFAULT_NOTDONE_ICON: &str = "❌";

/// Root persisted document (`config.json`)
///
/// Field order matches the order setup writes them in, so freshly created
/// files read the same as the ones older versions produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub initial_setup_done: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub hierarchical: bool,
    #[serde(default)]
    pub display_hierarchy: bool,
    #[serde(default)]
    pub disable_line: bool,
    #[serde(default)]
    pub disable_quotes: bool,
    #[serde(default)]
    pub disable_greeting: bool,
    #[serde(default)]
    pub time_format_24h: bool,
    /// Local date (`%d-%m-%Y`) the daily view was last shown
    #[serde(default)]
    pub last_reminder: Option<String>,
    #[serde(default = "default_done_icon")]
    pub done_icon: String,
    #[serde(default = "default_notdone_icon")]
    pub notdone_icon: String,
    #[serde(default)]
    pub quotes_file: String,
    /// Keys unknown to this version, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_done_icon() -> String {
    DEFAULT_DONE_ICON.to_string()
}

fn default_notdone_icon() -> String {
    DEFAULT_NOTDONE_ICON.to_string()
}

impl Config {
    /// Fresh config as written by the setup wizard
    pub fn new(user_name: impl Into<String>, quotes_file: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            initial_setup_done: true,
            tasks: Vec::new(),
            hierarchical: false,
            display_hierarchy: false,
            disable_line: false,
            disable_quotes: false,
            disable_greeting: false,
            time_format_24h: false,
            last_reminder: None,
            done_icon: default_done_icon(),
            notdone_icon: default_notdone_icon(),
            quotes_file: quotes_file.into(),
            extra: Map::new(),
        }
    }

    /// Setup must run instead of normal dispatch
    pub fn needs_setup(&self) -> bool {
        !self.initial_setup_done || self.user_name.trim().is_empty()
    }

    pub fn all_tasks_done(&self) -> bool {
        all_done(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new("Ada", "/tmp/quotes.json");
        assert!(config.initial_setup_done);
        assert!(!config.needs_setup());
        assert!(config.tasks.is_empty());
        assert_eq!(config.done_icon, DEFAULT_DONE_ICON);
        assert_eq!(config.notdone_icon, DEFAULT_NOTDONE_ICON);
        assert!(config.last_reminder.is_none());
    }

    #[test]
    fn test_needs_setup() {
        let mut config = Config::new("Ada", "q.json");
        config.initial_setup_done = false;
        assert!(config.needs_setup());

        let config = Config::new("  ", "q.json");
        assert!(config.needs_setup());
    }

    #[test]
    fn test_last_reminder_serialized_as_null() {
        let json = serde_json::to_value(Config::new("Ada", "q.json")).unwrap();
        assert_eq!(json["last_reminder"], Value::Null);
        assert_eq!(json["tasks"], serde_json::json!([]));
    }

    #[test]
    fn test_all_tasks_done_on_empty_list() {
        assert!(Config::new("Ada", "q.json").all_tasks_done());
    }
}
