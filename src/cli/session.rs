// What to show when `please` runs without a subcommand

use crate::cli::output::{
    center_print, format_greeting, format_quote, format_rule, format_task_table, get_terminal_width,
    is_tty, MessageStyle, NO_PENDING_TASKS,
};
use crate::models::Config;
use crate::repo::QuoteProvider;
use crate::store::ConfigStore;
use crate::utils::{format_greeting_time, today_marker};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use log::debug;
use std::path::Path;

/// One step of the default view, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStep {
    /// Divider with the greeting (possibly empty) in the middle
    Rule(String),
    /// Greeting on its own line, used when the divider is disabled
    Banner(String),
    /// A random quote with its author
    Quote,
    /// The task list, subject to the all-done policy
    Tasks,
}

/// How the task list renders for a given config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListView {
    /// Full table, followed by the congratulation line when nothing is pending
    Table { congratulate: bool },
    /// Congratulation line only
    Congratulate,
}

/// Decides and renders the default and daily views
pub struct SessionController;

impl SessionController {
    /// Steps of the default view for `config` at local time `now`
    pub fn plan_default_view(config: &Config, now: NaiveDateTime) -> Vec<ViewStep> {
        let mut steps = Vec::new();

        let greeting = if config.disable_greeting {
            String::new()
        } else {
            let clock = format_greeting_time(now, config.time_format_24h);
            format_greeting(&config.user_name, &clock)
        };

        if !config.disable_line {
            steps.push(ViewStep::Rule(greeting));
        } else if !greeting.is_empty() {
            steps.push(ViewStep::Banner(greeting));
        }

        if !config.disable_quotes {
            steps.push(ViewStep::Quote);
        }

        steps.push(ViewStep::Tasks);
        steps
    }

    /// Whether the daily view still has to be shown for `today`.
    ///
    /// A missing or unreadable marker counts as "not shown yet".
    pub fn daily_due(config: &Config, today: &str) -> bool {
        match config.last_reminder.as_deref() {
            Some(last) => last != today,
            None => true,
        }
    }

    /// Table policy: a forced print always shows the table
    pub fn plan_task_list(config: &Config, forced: bool) -> TaskListView {
        let all_done = config.all_tasks_done();
        if !all_done || forced {
            TaskListView::Table { congratulate: all_done }
        } else {
            TaskListView::Congratulate
        }
    }

    /// Render the default view
    pub fn show_default_view(config: &Config) {
        let width = get_terminal_width();
        let tty = is_tty();
        let steps = Self::plan_default_view(config, Local::now().naive_local());
        debug!("Default view steps: {:?}", steps);

        for step in steps {
            match step {
                ViewStep::Rule(greeting) => println!("{}", format_rule(&greeting, width, tty)),
                ViewStep::Banner(greeting) => center_print(&greeting, MessageStyle::Plain),
                ViewStep::Quote => match QuoteProvider::pick(Path::new(&config.quotes_file)) {
                    Ok(quote) => println!("{}\n", format_quote(&quote, width, tty)),
                    Err(e) => center_print(&e.to_string(), MessageStyle::Error),
                },
                ViewStep::Tasks => Self::print_tasks(config, false),
            }
        }
    }

    /// Show the default view at most once per local day
    pub fn run_daily(config: &mut Config, store: &ConfigStore) -> Result<()> {
        let today = today_marker();
        if !Self::daily_due(config, &today) {
            debug!("Daily view already shown on {}", today);
            return Ok(());
        }

        config.last_reminder = Some(today);
        store.save(config).context("Failed to save config")?;
        Self::show_default_view(config);
        Ok(())
    }

    /// Print the task list according to the all-done policy
    pub fn print_tasks(config: &Config, forced: bool) {
        match Self::plan_task_list(config, forced) {
            TaskListView::Table { congratulate } => {
                println!(
                    "{}",
                    format_task_table(
                        &config.tasks,
                        &config.done_icon,
                        &config.notdone_icon,
                        get_terminal_width(),
                        is_tty()
                    )
                );
                if congratulate {
                    center_print(NO_PENDING_TASKS, MessageStyle::Celebrate);
                }
            }
            TaskListView::Congratulate => center_print(NO_PENDING_TASKS, MessageStyle::Celebrate),
        }
    }
}
