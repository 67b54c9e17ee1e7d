use log::debug;
use serde_json::{Map, Value};

use crate::models::{DEFAULT_DONE_ICON, DEFAULT_NOTDONE_ICON};
use crate::utils::{prune_empty, EmptyPolicy};

/// Fills absent config keys with their defaults and sanitizes the task list
///
/// Runs once on every load, before the document is turned into a `Config`.
/// Missing keys and keys holding the wrong JSON type get their default.
/// Keys this version does not know about are left alone.
pub struct ConfigNormalizer;

impl ConfigNormalizer {
    /// Normalize a raw config document in place.
    ///
    /// Returns true when anything changed, so the caller can write the
    /// healed document back once.
    pub fn normalize(doc: &mut Map<String, Value>, default_quotes_file: &str) -> bool {
        let mut changed = false;

        for (key, default) in default_entries(default_quotes_file) {
            match doc.get(key) {
                None => {
                    debug!("Config key '{}' missing, defaulting to {}", key, default);
                }
                Some(value) if same_kind(value, &default) => continue,
                Some(value) => {
                    debug!("Config key '{}' has unusable value {}, defaulting to {}", key, value, default);
                }
            }
            doc.insert(key.to_string(), default);
            changed = true;
        }

        if let Some(Value::Array(tasks)) = doc.get_mut("tasks") {
            if Self::sanitize_tasks(tasks) {
                changed = true;
            }
        }

        changed
    }

    /// Drop empty members ("", {}, [], null) from every task entry.
    ///
    /// An empty `subtasks` array disappears, and entries that end up with
    /// nothing left are removed from the list.
    fn sanitize_tasks(tasks: &mut Vec<Value>) -> bool {
        let cleaned: Vec<Value> = tasks
            .iter()
            .filter_map(|task| prune_empty(task, EmptyPolicy::DropKeys))
            .collect();

        if cleaned != *tasks {
            debug!("Sanitized task list ({} -> {} entries)", tasks.len(), cleaned.len());
            *tasks = cleaned;
            true
        } else {
            false
        }
    }
}

/// Whether `value` has the JSON type a key with `default` expects.
///
/// A null default stands for an optional string.
fn same_kind(value: &Value, default: &Value) -> bool {
    match default {
        Value::Null => value.is_null() || value.is_string(),
        Value::Bool(_) => value.is_boolean(),
        Value::String(_) => value.is_string(),
        Value::Array(_) => value.is_array(),
        Value::Number(_) => value.is_number(),
        Value::Object(_) => value.is_object(),
    }
}

/// Every optional key with its default, in setup order
fn default_entries(default_quotes_file: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("tasks", Value::Array(Vec::new())),
        ("hierarchical", Value::Bool(false)),
        ("display_hierarchy", Value::Bool(false)),
        ("disable_line", Value::Bool(false)),
        ("disable_quotes", Value::Bool(false)),
        ("disable_greeting", Value::Bool(false)),
        ("time_format_24h", Value::Bool(false)),
        ("last_reminder", Value::Null),
        ("done_icon", Value::from(DEFAULT_DONE_ICON)),
        ("notdone_icon", Value::from(DEFAULT_NOTDONE_ICON)),
        ("quotes_file", Value::from(default_quotes_file)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_fills_missing_keys() {
        let mut doc = as_map(json!({"user_name": "Ada", "initial_setup_done": true}));
        assert!(ConfigNormalizer::normalize(&mut doc, "/q.json"));
        assert_eq!(doc["tasks"], json!([]));
        assert_eq!(doc["disable_greeting"], json!(false));
        assert_eq!(doc["last_reminder"], Value::Null);
        assert_eq!(doc["quotes_file"], json!("/q.json"));
        assert_eq!(doc["done_icon"], json!(DEFAULT_DONE_ICON));
    }

    #[test]
    fn test_never_overwrites_present_keys() {
        let mut doc = as_map(json!({"user_name": "Ada", "disable_quotes": true, "done_icon": "[x]"}));
        ConfigNormalizer::normalize(&mut doc, "/q.json");
        assert_eq!(doc["disable_quotes"], json!(true));
        assert_eq!(doc["done_icon"], json!("[x]"));
    }

    #[test]
    fn test_complete_document_is_unchanged() {
        let mut doc = as_map(json!({}));
        ConfigNormalizer::normalize(&mut doc, "/q.json");
        let before = doc.clone();
        assert!(!ConfigNormalizer::normalize(&mut doc, "/q.json"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_null_toggle_defaulted() {
        let mut doc = as_map(json!({"disable_greeting": null, "hierarchical": true}));
        assert!(ConfigNormalizer::normalize(&mut doc, "/q.json"));
        assert_eq!(doc["disable_greeting"], json!(false));
        assert_eq!(doc["hierarchical"], json!(true));
    }

    #[test]
    fn test_wrong_types_defaulted() {
        let mut doc = as_map(json!({
            "disable_quotes": "yes",
            "done_icon": 7,
            "quotes_file": ["a.json"],
            "tasks": {"name": "a"},
            "last_reminder": 20261019
        }));
        assert!(ConfigNormalizer::normalize(&mut doc, "/q.json"));
        assert_eq!(doc["disable_quotes"], json!(false));
        assert_eq!(doc["done_icon"], json!(DEFAULT_DONE_ICON));
        assert_eq!(doc["quotes_file"], json!("/q.json"));
        assert_eq!(doc["tasks"], json!([]));
        assert_eq!(doc["last_reminder"], Value::Null);
    }

    #[test]
    fn test_string_marker_kept() {
        let mut doc = as_map(json!({"last_reminder": "not a date"}));
        ConfigNormalizer::normalize(&mut doc, "/q.json");
        assert_eq!(doc["last_reminder"], json!("not a date"));
    }

    #[test]
    fn test_unknown_keys_kept() {
        let mut doc = as_map(json!({"theme": "", "plugins": []}));
        ConfigNormalizer::normalize(&mut doc, "/q.json");
        assert_eq!(doc["theme"], json!(""));
        assert_eq!(doc["plugins"], json!([]));
    }

    #[test]
    fn test_empty_subtasks_removed() {
        let mut doc = as_map(json!({
            "tasks": [
                {"name": "a", "done": false, "subtasks": []},
                {"name": "b", "done": true, "subtasks": [{"name": "c", "done": false}]}
            ]
        }));
        assert!(ConfigNormalizer::normalize(&mut doc, "/q.json"));
        assert_eq!(doc["tasks"][0], json!({"name": "a", "done": false}));
        assert_eq!(doc["tasks"][1]["subtasks"][0]["name"], json!("c"));
    }
}
