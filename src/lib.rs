//! Please - a minimal command-line task reminder
//!
//! This library provides the core functionality for Please, including:
//! - Loading, normalizing and saving the JSON config document
//! - Data models for the config, tasks and quotes
//! - Task list operations (add, delete, do/undo, move, edit, clean, subtasks)
//! - Random quote selection from a validated quotes file
//! - The greeting / quote / task list view and its once-a-day variant
//!
//! # Example
//!
//! ```no_run
//! use please::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod models;
pub mod store;
pub mod repo;
pub mod cli;
pub mod utils;
