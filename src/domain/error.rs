use std::path::PathBuf;
use thiserror::Error;

/// CDX unified error type
#[derive(Error, Debug)]
pub enum CdxError {
    #[error("Alias '{alias}' not found")]
    NotFound { alias: String },

    #[error("Invalid directory path: {} ({reason})", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Failed to write alias file {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse alias file {}: {source}", .path.display())]
    LoadParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read alias file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open directory {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {0}")]
    Output(String),
}

impl CdxError {
    /// Whether this error leaves the store usable (load failures fall back to an empty store).
    pub fn is_recoverable_load(&self) -> bool {
        matches!(self, Self::LoadParse { .. } | Self::Read { .. })
    }
}

pub type CdxResult<T> = Result<T, CdxError>;
