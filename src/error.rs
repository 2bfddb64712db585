use std::path::PathBuf;
use thiserror::Error;

/// Misuse of a manually owned slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("slot holds no record")]
    Empty,

    #[error("record was already released")]
    AlreadyReleased,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid record name: {reason}")]
    InvalidName { reason: String },
}

impl ConfigError {
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }
}
