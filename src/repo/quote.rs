use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Config, Quote};

/// Reasons a quotes file cannot be used
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Sorry, the file was not found, ensure that you provided the full path of the JSON file and the file exists ({})", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Please insert a file with a valid JSON format ({reason})")]
    InvalidFormat { reason: String },

    #[error("There must be at least 1 quote")]
    Empty,

    #[error("The JSON must have the \"author\" and \"content\" fields (entry {index} does not)")]
    MissingFields { index: usize },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads and validates quote lists
pub struct QuoteProvider;

impl QuoteProvider {
    /// Load the whole quotes file, rejecting it unless every entry is usable
    pub fn load(path: &Path) -> Result<Vec<Quote>, QuoteError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                QuoteError::FileNotFound { path: path.to_path_buf() }
            } else {
                QuoteError::Io { path: path.to_path_buf(), source: e }
            }
        })?;

        let doc: Value = serde_json::from_str(&content)
            .map_err(|e| QuoteError::InvalidFormat { reason: e.to_string() })?;
        let entries = match doc {
            Value::Array(entries) => entries,
            _ => {
                return Err(QuoteError::InvalidFormat {
                    reason: "expected a list of quotes".to_string(),
                })
            }
        };

        if entries.is_empty() {
            return Err(QuoteError::Empty);
        }

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_entry(entry).ok_or(QuoteError::MissingFields { index: i + 1 }))
            .collect()
    }

    /// Pick one quote from the file uniformly at random
    pub fn pick(path: &Path) -> Result<Quote, QuoteError> {
        let quotes = Self::load(path)?;
        Self::choose(&quotes, &mut rand::thread_rng())
    }

    /// Pick one quote from an already loaded list
    pub fn choose<R: Rng + ?Sized>(quotes: &[Quote], rng: &mut R) -> Result<Quote, QuoteError> {
        let quote = quotes.choose(rng).cloned().ok_or(QuoteError::Empty)?;
        debug!("Picked quote by {} out of {}", quote.author, quotes.len());
        Ok(quote)
    }

    /// Point the config at a new quotes file after validating it.
    ///
    /// The config is left untouched when validation fails.
    pub fn set_quotes_file(config: &mut Config, path: &str) -> Result<(), QuoteError> {
        let count = Self::load(Path::new(path))?.len();
        debug!("Quotes file {} holds {} quotes", path, count);
        config.quotes_file = path.to_string();
        Ok(())
    }
}

fn parse_entry(entry: &Value) -> Option<Quote> {
    let content = entry.get("content")?.as_str()?;
    let author = entry.get("author")?.as_str()?;
    Some(Quote {
        content: content.to_string(),
        author: author.to_string(),
    })
}
