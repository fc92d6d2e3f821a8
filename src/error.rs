//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O and JSON errors, wraps PDF encoder failures, and
//! provides a semantic variant for parameter validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF render error: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid parameter: {arg}={value}")]
    InvalidParameter { arg: &'static str, value: String },
}

impl Error {
    pub fn render<E: std::fmt::Display>(e: E) -> Self {
        Error::Render(e.to_string())
    }
}
