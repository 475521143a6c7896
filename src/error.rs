//! Error types shared by the registry, the config store and the handlers

use std::path::PathBuf;

use thiserror::Error;

/// Every failure the dispatcher or the config store can produce
#[derive(Error, Debug)]
pub enum Error {
    /// Dispatch requested a name nobody registered
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("could not determine the home directory")]
    HomeDirectoryUnavailable,

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config file {}: {source}", path.display())]
    ConfigFileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A handler rejected its arguments; the message is meant for the user
    #[error("{0}")]
    HandlerArgument(String),

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
