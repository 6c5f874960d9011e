//! Application error types
//!
//! Unified error handling for the entire application.

use savefood_core::DomainError;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Persisted-session errors
    #[error("Session store error: {0}")]
    Session(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for presentation
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::Session(_) => "SESSION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Get the localization key shown to the end user
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => "error.invalidInput",
            Self::NotFound(_) => "error.notFound",
            Self::AlreadyExists(_) | Self::Conflict(_) => "error.conflict",
            Self::Session(_) | Self::Internal(_) | Self::Config(_) => "error.internal",
            Self::Domain(e) => e.message_key(),
        }
    }

    /// Whether the failure was caused by the caller's input or state
    /// (as opposed to an infrastructure fault)
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::Session(_) | Self::Internal(_) | Self::Config(_))
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
