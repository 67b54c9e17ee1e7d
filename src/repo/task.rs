use std::fmt;

use log::debug;
use thiserror::Error;

use crate::models::{Config, Task};

/// What the user was trying to do when a task operation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    AddSubtask,
    Delete,
    MarkDone,
    MarkUndone,
    Move,
    Edit,
}

impl TaskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::AddSubtask => "add a subtask for",
            TaskAction::Delete => "delete",
            TaskAction::MarkDone => "mark as done",
            TaskAction::MarkUndone => "mark as undone",
            TaskAction::Move => "move",
            TaskAction::Edit => "edit",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejections of task list operations
///
/// These are user input problems. The list is never modified when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Tasks hierarchy is currently disabled in your configuration")]
    HierarchyDisabled,

    #[error("Are you sure you gave me the correct number to {action}? There is no task {index}.")]
    IndexOutOfRange { action: TaskAction, index: usize },

    #[error("Sorry, there are no tasks to {action}, the task list is empty")]
    EmptyList { action: TaskAction },

    #[error("Please check the entered index values ({old} and {new})")]
    InvalidIndex { old: usize, new: usize },

    #[error("Please enter a valid name")]
    EmptyName,
}

/// Result of an operation that may leave the list as it was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list changed and must be persisted
    Updated,
    /// Nothing to change
    NoUpdates,
    /// `do` on a list where every task was already done
    AllDone,
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::Updated)
    }
}

/// Operations on the task list held in the config
///
/// Positions are 1-based and only valid for the current order of the list.
/// Every operation validates its input before touching anything, so a
/// rejected call leaves the config exactly as it was.
///
/// # Example
///
/// ```
/// use please::models::Config;
/// use please::repo::{Outcome, TaskTree};
///
/// let mut config = Config::new("Ada", "quotes.json");
/// TaskTree::add(&mut config, "buy milk", None).unwrap();
/// assert_eq!(TaskTree::mark_done(&mut config, 1).unwrap(), Outcome::Updated);
/// assert!(config.tasks[0].done);
/// ```
pub struct TaskTree;

impl TaskTree {
    /// Append a task to the root list, or to the subtasks of `parent`
    pub fn add(config: &mut Config, name: &str, parent: Option<usize>) -> Result<(), TaskError> {
        validate_name(name)?;

        match parent {
            None => {
                config.tasks.push(Task::new(name));
                debug!("Added task '{}' at position {}", name, config.tasks.len());
            }
            Some(parent_index) => {
                if !config.hierarchical {
                    return Err(TaskError::HierarchyDisabled);
                }
                let pos = resolve(config.tasks.len(), parent_index).ok_or(TaskError::IndexOutOfRange {
                    action: TaskAction::AddSubtask,
                    index: parent_index,
                })?;
                config.tasks[pos].push_subtask(Task::new(name));
                debug!("Added subtask '{}' under task {}", name, parent_index);
            }
        }
        Ok(())
    }

    /// Remove the task at `index` and return it.
    ///
    /// Subtasks of a removed parent go with it.
    pub fn delete(config: &mut Config, index: usize) -> Result<Task, TaskError> {
        if config.tasks.is_empty() {
            return Err(TaskError::EmptyList { action: TaskAction::Delete });
        }
        let pos = resolve(config.tasks.len(), index).ok_or(TaskError::IndexOutOfRange {
            action: TaskAction::Delete,
            index,
        })?;

        let removed = config.tasks.remove(pos);
        if removed.subtask_count() > 0 {
            debug!("Deleting '{}' discards {} subtasks", removed.name, removed.subtask_count());
        }
        Ok(removed)
    }

    /// Mark the task at `index` as done.
    ///
    /// When every task is already done the call reports `AllDone`; the check
    /// runs on the list as it was before this call.
    pub fn mark_done(config: &mut Config, index: usize) -> Result<Outcome, TaskError> {
        let pos = resolve(config.tasks.len(), index).ok_or(TaskError::IndexOutOfRange {
            action: TaskAction::MarkDone,
            index,
        })?;

        if config.all_tasks_done() {
            return Ok(Outcome::AllDone);
        }
        if config.tasks[pos].done {
            return Ok(Outcome::NoUpdates);
        }

        config.tasks[pos].done = true;
        debug!("Marked task {} as done", index);
        Ok(Outcome::Updated)
    }

    /// Mark the task at `index` as pending again
    pub fn mark_undone(config: &mut Config, index: usize) -> Result<Outcome, TaskError> {
        let pos = resolve(config.tasks.len(), index).ok_or(TaskError::IndexOutOfRange {
            action: TaskAction::MarkUndone,
            index,
        })?;

        if !config.tasks[pos].done {
            return Ok(Outcome::NoUpdates);
        }

        config.tasks[pos].done = false;
        debug!("Marked task {} as undone", index);
        Ok(Outcome::Updated)
    }

    /// Exchange the tasks at `old_index` and `new_index`
    pub fn move_task(config: &mut Config, old_index: usize, new_index: usize) -> Result<Outcome, TaskError> {
        if config.tasks.is_empty() {
            return Err(TaskError::EmptyList { action: TaskAction::Move });
        }
        let len = config.tasks.len();
        let (old_pos, new_pos) = match (resolve(len, old_index), resolve(len, new_index)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(TaskError::InvalidIndex {
                    old: old_index,
                    new: new_index,
                })
            }
        };

        if old_pos == new_pos {
            return Ok(Outcome::NoUpdates);
        }

        config.tasks.swap(old_pos, new_pos);
        debug!("Swapped tasks {} and {}", old_index, new_index);
        Ok(Outcome::Updated)
    }

    /// Rename the task at `index`
    pub fn edit(config: &mut Config, index: usize, new_name: &str) -> Result<Outcome, TaskError> {
        if config.tasks.is_empty() {
            return Err(TaskError::EmptyList { action: TaskAction::Edit });
        }
        let pos = resolve(config.tasks.len(), index).ok_or(TaskError::IndexOutOfRange {
            action: TaskAction::Edit,
            index,
        })?;
        validate_name(new_name)?;

        let task = &mut config.tasks[pos];
        if task.name == new_name {
            return Ok(Outcome::NoUpdates);
        }

        debug!("Renamed task {} from '{}' to '{}'", index, task.name, new_name);
        task.name = new_name.to_string();
        Ok(Outcome::Updated)
    }

    /// Drop every done task from the root list, keeping the order of the rest
    pub fn clean(config: &mut Config) -> Outcome {
        let before = config.tasks.len();
        config.tasks.retain(|task| !task.done);
        let removed = before - config.tasks.len();

        if removed == 0 {
            Outcome::NoUpdates
        } else {
            debug!("Cleaned {} done tasks", removed);
            Outcome::Updated
        }
    }
}

/// Convert a 1-based position into an index into a list of `len` items
fn resolve(len: usize, index: usize) -> Option<usize> {
    if index >= 1 && index <= len {
        Some(index - 1)
    } else {
        None
    }
}

fn validate_name(name: &str) -> Result<(), TaskError> {
    if name.trim().is_empty() {
        Err(TaskError::EmptyName)
    } else {
        Ok(())
    }
}
