use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Task model
///
/// A task lives in the root sequence of the config or, in hierarchical
/// mode, in the `subtasks` of a root task. Tasks have no stable id: they are
/// addressed by their 1-based position in the containing sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    /// Absent or non-empty, only one level deep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Task>>,
    /// Keys written by other versions of the tool
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a new pending task
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            subtasks: None,
            extra: Map::new(),
        }
    }

    /// Append a subtask, creating the subtask list on first use
    pub fn push_subtask(&mut self, task: Task) {
        self.subtasks.get_or_insert_with(Vec::new).push(task);
    }

    pub fn subtask_count(&self) -> usize {
        self.subtasks.as_ref().map_or(0, Vec::len)
    }
}

/// True when every task in the sequence is done (vacuously true when empty)
pub fn all_done(tasks: &[Task]) -> bool {
    tasks.iter().all(|t| t.done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("buy milk");
        assert_eq!(task.name, "buy milk");
        assert!(!task.done);
        assert!(task.subtasks.is_none());
    }

    #[test]
    fn test_push_subtask_creates_list() {
        let mut task = Task::new("parent");
        assert_eq!(task.subtask_count(), 0);
        task.push_subtask(Task::new("child 1"));
        task.push_subtask(Task::new("child 2"));
        assert_eq!(task.subtask_count(), 2);
        assert_eq!(task.subtasks.unwrap()[1].name, "child 2");
    }

    #[test]
    fn test_serialization_omits_absent_subtasks() {
        let json = serde_json::to_value(Task::new("a")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "a", "done": false}));
    }

    #[test]
    fn test_unknown_keys_survive() {
        let raw = serde_json::json!({"name": "a", "done": true, "priority": 3});
        let task: Task = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(task.extra.get("priority"), Some(&Value::from(3)));
        assert_eq!(serde_json::to_value(&task).unwrap(), raw);
    }

    #[test]
    fn test_all_done() {
        assert!(all_done(&[]));
        let mut a = Task::new("a");
        let b = Task::new("b");
        a.done = true;
        assert!(!all_done(&[a.clone(), b]));
        assert!(all_done(&[a]));
    }
}
