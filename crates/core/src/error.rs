use std::io;

/// Errors that can occur during pyflymake operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown checker '{name}' (valid checkers are: {valid})")]
    UnknownChecker { name: String, valid: String },

    #[error("Failed to launch '{command}': {source}")]
    LaunchError { command: String, source: io::Error },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for pyflymake operations
pub type Result<T> = std::result::Result<T, Error>;
