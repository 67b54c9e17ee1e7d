pub mod config_store;
pub mod normalize;

pub use config_store::*;
pub use normalize::*;

use std::path::PathBuf;
use thiserror::Error;

/// Failures loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config file found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Something's wrong with your config file ({reason}). You can fix {} manually or you can enter your name again in the setup wizard to reset the config file. ENTERING NAME WILL OVERWRITE YOUR PREVIOUS CONFIG.", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
