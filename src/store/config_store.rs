use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;

use super::normalize::ConfigNormalizer;
use super::ConfigError;
use crate::models::Config;

/// Quotes shipped with the binary, written next to the config on first use
pub const BUNDLED_QUOTES: &str = include_str!("../../assets/quotes.json");

const CONFIG_FILE_NAME: &str = "config.json";
const QUOTES_FILE_NAME: &str = "quotes.json";

/// Result of loading the config file
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// Normalization filled or cleaned something; the file should be rewritten
    pub healed: bool,
}

/// Config file manager
///
/// The whole persistent state of the tool is one JSON document. It is read
/// once per invocation and rewritten in full after every mutation.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the default config directory (`~/.config/please`)
    pub fn default_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home.join(".config").join("please"))
    }

    /// Open the store at the default location, creating the directory if needed
    pub fn open_default() -> Result<Self> {
        let dir = Self::default_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        Ok(Self::new(dir.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the config file
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Where the bundled quotes file lives
    pub fn default_quotes_path(&self) -> PathBuf {
        self.dir().join(QUOTES_FILE_NAME)
    }

    /// Load, normalize and parse the config file
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::NotFound { path: self.path.clone() }
            } else {
                ConfigError::Io { path: self.path.clone(), source: e }
            }
        })?;

        let mut doc = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(self.corrupt("top-level value is not an object")),
            Err(e) => return Err(self.corrupt(e)),
        };

        let default_quotes = self.default_quotes_path();
        let healed = ConfigNormalizer::normalize(&mut doc, &default_quotes.to_string_lossy());

        let config: Config =
            serde_json::from_value(Value::Object(doc)).map_err(|e| self.corrupt(e))?;

        debug!(
            "Loaded config from {} ({} tasks, healed: {})",
            self.path.display(),
            config.tasks.len(),
            healed
        );
        Ok(LoadedConfig { config, healed })
    }

    /// Overwrite the config file with a pretty-printed copy of `config`.
    ///
    /// The document is written to a sibling temp file first and renamed
    /// into place, so readers see either the old or the new content.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(config)?;

        let dir = self.dir();
        fs::create_dir_all(dir).map_err(|e| ConfigError::Io { path: dir.to_path_buf(), source: e })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .map_err(|e| ConfigError::Io { path: tmp_path.clone(), source: e })?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| ConfigError::Io { path: self.path.clone(), source: e })?;

        debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Write the bundled quotes file if it is missing
    pub fn ensure_bundled_quotes(&self) -> Result<(), ConfigError> {
        let path = self.default_quotes_path();
        if path.exists() {
            return Ok(());
        }
        fs::write(&path, BUNDLED_QUOTES).map_err(|e| ConfigError::Io { path: path.clone(), source: e })?;
        debug!("Wrote bundled quotes to {}", path.display());
        Ok(())
    }

    fn corrupt(&self, reason: impl ToString) -> ConfigError {
        ConfigError::Corrupt {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}
