//! Error types for the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while persisting or loading session state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The state directory or a state file could not be read or written.
    #[error("state storage i/o: {0}")]
    Io(#[from] std::io::Error),

    /// A state value could not be serialized.
    #[error("state serialization: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An unknown region name was supplied.
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}
