// Error reporting for user-facing failures
//
// User errors never abort the process: they are printed as a single
// centered, styled message and the command ends successfully.

use crate::cli::output::{center_print, MessageStyle};
use crate::repo::{QuoteError, TaskError};

/// Style a rejected task operation is reported with
pub fn task_error_style(err: &TaskError) -> MessageStyle {
    match err {
        TaskError::HierarchyDisabled
        | TaskError::IndexOutOfRange { .. }
        | TaskError::InvalidIndex { .. } => MessageStyle::Warning,
        TaskError::EmptyList { .. } | TaskError::EmptyName => MessageStyle::Error,
    }
}

/// Report a rejected task operation
pub fn report_task_error(err: &TaskError) {
    log::debug!("Task operation rejected: {:?}", err);
    center_print(&err.to_string(), task_error_style(err));
}

/// Report an unusable quotes file
pub fn report_quote_error(err: &QuoteError) {
    log::debug!("Quotes file rejected: {:?}", err);
    center_print(&err.to_string(), MessageStyle::Error);
}

/// Report a user error with a plain message
pub fn user_error(message: &str) {
    center_print(message, MessageStyle::Warning);
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}
