use shared::error::AppError;
use thiserror::Error;

/// Startup and serve failures (request-level errors use [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database initialization failed: {0}")]
    Database(#[from] AppError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
