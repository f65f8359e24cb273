use std::path::PathBuf;
use thiserror::Error;

use crate::config::BuggyRange;

/// Result type for version guard operations
pub type Result<T> = std::result::Result<T, VersionGuardError>;

#[derive(Error, Debug)]
pub enum VersionGuardError {
    #[error("Invalid version `{0}`: expected dot-separated numbers")]
    InvalidVersion(String),

    #[error(
        "You are running {engine} {version}. {reason} Please update your {engine} distribution."
    )]
    KnownBuggyVersion {
        engine: String,
        version: String,
        range: BuggyRange,
        reason: String,
    },

    #[error("Failed to access config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
