//! # Security Error Types
//!
//! All errors that can occur while configuring or running checks.

use thiserror::Error;
use warden_core::CoreError;

use crate::config::ConfigError;

/// Errors that can occur in the check engine.
#[derive(Error, Debug)]
pub enum SecurityError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// World data was rejected by the classifier.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for check engine operations.
pub type SecurityResult<T> = Result<T, SecurityError>;
