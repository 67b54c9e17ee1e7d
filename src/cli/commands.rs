use crate::cli::error::{report_quote_error, report_task_error, user_error, validate_non_empty};
use crate::cli::output::{center_print, MessageStyle};
use crate::cli::session::SessionController;
use crate::cli::setup::run_setup;
use crate::models::Config;
use crate::repo::{Outcome, QuoteProvider, TaskTree};
use crate::store::{ConfigError, ConfigStore};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::io;

#[derive(Parser)]
#[command(name = "please")]
#[command(about = "Please - a minimal command-line task reminder with greetings and daily quotes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Without a subcommand, greets you and shows a quote and your tasks
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Change name without resetting data
    Callme {
        /// What to call you
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Add a task
    Add {
        /// Task description
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
        /// Number of the parent task (hierarchical mode only)
        #[arg(long = "parent-id")]
        parent_id: Option<usize>,
    },
    /// Delete a task
    Delete {
        /// Task number
        index: usize,
    },
    /// Mark a task as done
    Do {
        /// Task number
        index: usize,
    },
    /// Mark a task as undone
    Undo {
        /// Task number
        index: usize,
    },
    /// Change task order by swapping two tasks
    Move {
        /// Number of the task to move
        old_index: usize,
        /// Number of the task to swap it with
        new_index: usize,
    },
    /// Edit task name
    Edit {
        /// Task number
        index: usize,
        /// New task name
        #[arg(required = true, num_args = 1..)]
        new_name: Vec<String>,
    },
    /// Clean up tasks marked as done from the task list
    Clean,
    /// Toggle time format between 12 hours and 24 hours
    Changetimeformat,
    /// Set a custom file to fetch quotes from
    Changequotes {
        /// Path to a JSON list of {"content", "author"} objects
        quotes_file: String,
    },
    /// Show all tasks
    Showtasks,
    /// Display the subtasks of a given parent task
    Showsubtasks {
        /// Number of the parent task
        parent_index: String,
    },
    /// Show the greeting, quote and tasks once a day
    Daily,
    /// Reset all data and run setup
    Setup,
}

/// State shared by every command: the loaded config and where it lives
pub struct CommandContext {
    pub config: Config,
    pub store: ConfigStore,
}

impl CommandContext {
    pub fn new(config: Config, store: ConfigStore) -> Self {
        Self { config, store }
    }

    /// Write the config back after a mutation
    fn persist(&self) -> Result<()> {
        self.store.save(&self.config).context("Failed to save config")
    }
}

pub fn run() -> Result<()> {
    // Parse errors and --help/--version are printed by clap and end the
    // run normally
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(());
        }
    };

    let store = ConfigStore::open_default()?;
    store
        .ensure_bundled_quotes()
        .context("Failed to write bundled quotes")?;

    let config = match store.load() {
        Ok(loaded) => {
            if loaded.healed {
                store.save(&loaded.config).context("Failed to save config")?;
            }
            loaded.config
        }
        Err(ConfigError::NotFound { .. }) => {
            debug!("No config at {}, running setup", store.path().display());
            run_setup(&store, &mut io::stdin().lock())?;
            return Ok(());
        }
        Err(e @ ConfigError::Corrupt { .. }) => {
            center_print(&e.to_string(), MessageStyle::Warning);
            run_setup(&store, &mut io::stdin().lock())?;
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to load config"),
    };

    if config.needs_setup() || matches!(cli.command, Some(Commands::Setup)) {
        run_setup(&store, &mut io::stdin().lock())?;
        return Ok(());
    }

    let mut ctx = CommandContext::new(config, store);
    handle_command(cli.command, &mut ctx)
}

pub fn handle_command(command: Option<Commands>, ctx: &mut CommandContext) -> Result<()> {
    debug!("Dispatching {:?}", command);
    match command {
        None => {
            SessionController::show_default_view(&ctx.config);
            Ok(())
        }
        Some(Commands::Callme { name }) => handle_callme(ctx, &name.join(" ")),
        Some(Commands::Add { task, parent_id }) => handle_add(ctx, &task.join(" "), parent_id),
        Some(Commands::Delete { index }) => handle_delete(ctx, index),
        Some(Commands::Do { index }) => handle_do(ctx, index),
        Some(Commands::Undo { index }) => handle_undo(ctx, index),
        Some(Commands::Move { old_index, new_index }) => handle_move(ctx, old_index, new_index),
        Some(Commands::Edit { index, new_name }) => handle_edit(ctx, index, &new_name.join(" ")),
        Some(Commands::Clean) => handle_clean(ctx),
        Some(Commands::Changetimeformat) => handle_change_time_format(ctx),
        Some(Commands::Changequotes { quotes_file }) => handle_change_quotes(ctx, &quotes_file),
        Some(Commands::Showtasks) => {
            SessionController::print_tasks(&ctx.config, true);
            Ok(())
        }
        Some(Commands::Showsubtasks { parent_index }) => {
            user_error(&format!(
                "Showing the subtasks of task {} is not implemented yet",
                parent_index
            ));
            Ok(())
        }
        Some(Commands::Daily) => SessionController::run_daily(&mut ctx.config, &ctx.store),
        Some(Commands::Setup) => {
            run_setup(&ctx.store, &mut io::stdin().lock())?;
            Ok(())
        }
    }
}

fn handle_callme(ctx: &mut CommandContext, name: &str) -> Result<()> {
    if let Err(msg) = validate_non_empty(name, "Name") {
        center_print(&msg, MessageStyle::Error);
        return Ok(());
    }

    ctx.config.user_name = name.trim().to_string();
    ctx.persist()?;
    center_print("\nThanks for letting me know your name!\n", MessageStyle::Success);
    Ok(())
}

fn handle_add(ctx: &mut CommandContext, task: &str, parent_id: Option<usize>) -> Result<()> {
    if let Err(e) = TaskTree::add(&mut ctx.config, task, parent_id) {
        report_task_error(&e);
        return Ok(());
    }

    ctx.persist()?;
    center_print(&format!("Added \"{}\" to the list", task), MessageStyle::Success);
    SessionController::print_tasks(&ctx.config, false);
    Ok(())
}

fn handle_delete(ctx: &mut CommandContext, index: usize) -> Result<()> {
    let removed = match TaskTree::delete(&mut ctx.config, index) {
        Ok(task) => task,
        Err(e) => {
            report_task_error(&e);
            return Ok(());
        }
    };

    ctx.persist()?;
    center_print(&format!("Deleted '{}'", removed.name), MessageStyle::Success);
    SessionController::print_tasks(&ctx.config, true);
    Ok(())
}

fn handle_do(ctx: &mut CommandContext, index: usize) -> Result<()> {
    match TaskTree::mark_done(&mut ctx.config, index) {
        Ok(Outcome::Updated) => {
            ctx.persist()?;
            center_print("Updated Task List", MessageStyle::Success);
            SessionController::print_tasks(&ctx.config, false);
        }
        Ok(Outcome::NoUpdates) => {
            center_print("No Updates Made, Task Already Done", MessageStyle::Info);
            SessionController::print_tasks(&ctx.config, false);
        }
        Ok(Outcome::AllDone) => {
            center_print("No Updates Made, All tasks are already completed!", MessageStyle::Success);
        }
        Err(e) => report_task_error(&e),
    }
    Ok(())
}

fn handle_undo(ctx: &mut CommandContext, index: usize) -> Result<()> {
    match TaskTree::mark_undone(&mut ctx.config, index) {
        Ok(outcome) => report_outcome(ctx, outcome, "Updated Task List", "No Updates Made, Task Still Pending"),
        Err(e) => {
            report_task_error(&e);
            Ok(())
        }
    }
}

fn handle_move(ctx: &mut CommandContext, old_index: usize, new_index: usize) -> Result<()> {
    match TaskTree::move_task(&mut ctx.config, old_index, new_index) {
        Ok(outcome) => report_outcome(ctx, outcome, "Updated Task List", "No Updates Made"),
        Err(e) => {
            report_task_error(&e);
            Ok(())
        }
    }
}

fn handle_edit(ctx: &mut CommandContext, index: usize, new_name: &str) -> Result<()> {
    match TaskTree::edit(&mut ctx.config, index, new_name) {
        Ok(outcome) => report_outcome(ctx, outcome, "Updated Task Name", "No Updates Made"),
        Err(e) => {
            report_task_error(&e);
            Ok(())
        }
    }
}

fn handle_clean(ctx: &mut CommandContext) -> Result<()> {
    let outcome = TaskTree::clean(&mut ctx.config);
    report_outcome(ctx, outcome, "Updated Task List", "No Updates Made")
}

/// Persist on change, report, then show the list
fn report_outcome(ctx: &CommandContext, outcome: Outcome, updated: &str, unchanged: &str) -> Result<()> {
    if outcome.is_change() {
        ctx.persist()?;
        center_print(updated, MessageStyle::Success);
    } else {
        center_print(unchanged, MessageStyle::Info);
    }
    SessionController::print_tasks(&ctx.config, false);
    Ok(())
}

fn handle_change_time_format(ctx: &mut CommandContext) -> Result<()> {
    ctx.config.time_format_24h = !ctx.config.time_format_24h;
    ctx.persist()?;

    if ctx.config.time_format_24h {
        center_print("Changed Time Format from 12h to 24h", MessageStyle::Success);
    } else {
        center_print("Changed Time Format from 24h to 12h", MessageStyle::Success);
    }
    Ok(())
}

fn handle_change_quotes(ctx: &mut CommandContext, quotes_file: &str) -> Result<()> {
    if let Err(e) = QuoteProvider::set_quotes_file(&mut ctx.config, quotes_file) {
        report_quote_error(&e);
        return Ok(());
    }

    ctx.persist()?;
    center_print(&format!("Changed quote file to {}", quotes_file), MessageStyle::Success);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_parent() {
        let cli = Cli::try_parse_from(["please", "add", "buy", "milk", "--parent-id", "2"]).unwrap();
        match cli.command {
            Some(Commands::Add { task, parent_id }) => {
                assert_eq!(task.join(" "), "buy milk");
                assert_eq!(parent_id, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["please"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric_index() {
        assert!(Cli::try_parse_from(["please", "do", "first"]).is_err());
    }

    #[test]
    fn test_parse_move() {
        let cli = Cli::try_parse_from(["please", "move", "1", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Move { old_index: 1, new_index: 3 })
        ));
    }
}
