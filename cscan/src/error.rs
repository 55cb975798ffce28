//! Error handling module for the cscan CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the cscan CLI application.
///
/// These are the fatal conditions: an unreadable input, an unwritable
/// output, a broken configuration. Malformed literals in the scanned source
/// are never errors at this level; they are rows in the report.
#[derive(Error, Debug)]
pub enum CscanError {
    /// Error when configuration loading or parsing fails.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CscanError.
pub type Result<T> = std::result::Result<T, CscanError>;
