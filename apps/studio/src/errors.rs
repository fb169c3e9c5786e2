#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
/// `user_message()` is the projection shown in the UI banner; internal detail
/// stays in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Short, user-facing text for the dismissible banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Image(msg) => format!("Could not load image: {msg}"),
            AppError::Export(msg) => format!("PDF export failed: {msg}"),
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "A file system error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        }
    }
}
