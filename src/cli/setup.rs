// First-run setup wizard

use crate::cli::error::validate_non_empty;
use crate::cli::output::{center_print, is_tty, MessageStyle};
use crate::models::Config;
use crate::store::ConfigStore;
use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Hello! What can I call you?";

/// Ask for the user's name and write a fresh config.
///
/// Any existing config (tasks included) is replaced. Returns `None` and
/// leaves the file untouched when input ends before a name is given.
pub fn run_setup<R: BufRead>(store: &ConfigStore, input: &mut R) -> Result<Option<Config>> {
    let name = match prompt_name(input)? {
        Some(name) => name,
        None => {
            println!();
            center_print("Setup cancelled, no name entered", MessageStyle::Warning);
            return Ok(None);
        }
    };

    let quotes_file = store.default_quotes_path();
    let config = Config::new(name, quotes_file.to_string_lossy());
    store.ensure_bundled_quotes().context("Failed to write bundled quotes")?;
    store.save(&config).context("Failed to save config")?;
    info!("Setup complete, config written to {}", store.path().display());

    center_print("\nThanks for letting me know your name!", MessageStyle::Plain);
    center_print("If you wanna change your name later, please use:", MessageStyle::Warning);
    println!("\n    please callme <Your Name Goes Here>\n");
    Ok(Some(config))
}

/// Prompt until a non-empty name is entered, `None` on end of input
fn prompt_name<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    loop {
        if is_tty() {
            print!("\x1b[36m{}\x1b[0m: ", PROMPT);
        } else {
            print!("{}: ", PROMPT);
        }
        io::stdout().flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read name")?;
        if read == 0 {
            return Ok(None);
        }

        let name = line.trim();
        match validate_non_empty(name, "Name") {
            Ok(()) => return Ok(Some(name.to_string())),
            Err(msg) => center_print(&msg, MessageStyle::Error),
        }
    }
}
