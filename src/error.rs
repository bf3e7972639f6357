use std::path::PathBuf;
use thiserror::Error;

use crate::forms::FormKind;

#[derive(Error, Debug)]
pub enum PitwallError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed JSON from API: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read preference store: {0}")]
    StoreRead(String),

    #[error("Failed to write preference store: {0}")]
    StoreWrite(String),

    #[error("{}", .0.empty_prompt())]
    EmptyInput(FormKind),

    #[error("Unknown team: {0} (run 'pitwall team list' to see the available keys)")]
    UnknownTeam(String),
}

/// Which side of the page an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required text was missing; never reaches the network.
    UserInput,
    /// Non-success status, transport failure or unreadable response body.
    BackendCall,
    /// Configuration, storage and other local failures.
    Local,
}

impl PitwallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PitwallError::EmptyInput(_) => ErrorKind::UserInput,
            PitwallError::Http(_)
            | PitwallError::Api { .. }
            | PitwallError::Decode(_)
            | PitwallError::EmptyResponse => ErrorKind::BackendCall,
            _ => ErrorKind::Local,
        }
    }
}

pub type Result<T> = std::result::Result<T, PitwallError>;
