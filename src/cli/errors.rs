use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Sheet(#[from] circlegrid::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
