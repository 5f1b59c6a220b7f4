//! Common error types for bulk image meta

use thiserror::Error;

/// Common result type for bulk image meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the store, config and processor layers
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite failure while opening the database or reading/writing attachments
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure creating the root folder or the database's parent dir
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable or unparsable `config.toml`
    #[error("Configuration error: {0}")]
    Config(String),

    /// No attachment with the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// A store rejected the values of an update (e.g. a locked record)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backend failure that fits no other variant, raised by custom stores
    #[error("Internal error: {0}")]
    Internal(String),
}
