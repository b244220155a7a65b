use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakdownError {
    #[error("Config directory not found at {0}. Run 'breakdown init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to parse line items from {path}: {source}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD (e.g., '2026-01-31')")]
    InvalidDate(String),

    #[error("Failed to encode output: {0}")]
    Output(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BreakdownError>;
