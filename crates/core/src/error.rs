// Central Error Type for the Application

use crate::port::UpstreamError;
use thiserror::Error;

/// Application-level error type
///
/// Only two outcomes reach callers: the arguments were rejected before any
/// upstream call, or the upstream call failed for any reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] crate::domain::DomainError),

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap an upstream failure under a generic per-operation message
    pub fn internal(message: impl Into<String>, cause: &UpstreamError) -> Self {
        AppError::Internal {
            message: message.into(),
            detail: cause.to_string(),
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
