// SPDX-License-Identifier: Apache-2.0

//! Error types for Vigil.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Vigil operations.
#[derive(Error, Debug)]
pub enum VigilError {
    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// Configuration error (invalid file, or no queries configured).
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The document cannot be rewritten (e.g. the list markers are missing).
    #[error("Document error: {message}")]
    Document {
        /// Error message.
        message: String,
    },

    /// Filesystem error reading or writing the document or run outputs.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for VigilError {
    fn from(err: octocrab::Error) -> Self {
        VigilError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for VigilError {
    fn from(err: config::ConfigError) -> Self {
        VigilError::Config {
            message: err.to_string(),
        }
    }
}
