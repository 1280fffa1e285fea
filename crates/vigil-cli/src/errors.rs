// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error`
//! to `VigilError` and adds actionable hints for each error type, keeping
//! structured error data (library) separate from presentation (CLI).

use anyhow::Error;
use vigil_core::VigilError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to `VigilError` and adds hints per variant.
/// If the error is not a `VigilError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(vigil_err) = error.downcast_ref::<VigilError>() {
        match vigil_err {
            VigilError::GitHub { message: _ } => {
                format!(
                    "{vigil_err}\n\nTip: Set GH_TOKEN or GITHUB_TOKEN for a higher rate limit, and check your network connection."
                )
            }
            VigilError::Config { message: _ } => {
                format!(
                    "{vigil_err}\n\nTip: Check your config file at {}",
                    vigil_core::config_file_path().display()
                )
            }
            VigilError::Document { message: _ } => {
                format!(
                    "{vigil_err}\n\nTip: Add the start and end marker lines to the document so the list section can be located."
                )
            }
            VigilError::Io(_) => {
                format!("{vigil_err}\n\nTip: Check that the document path exists and is writable.")
            }
        }
    } else {
        // Not a VigilError, return the original error chain
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_github_error() {
        let error = VigilError::GitHub {
            message: "boom".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("GitHub API error: boom"));
        assert!(formatted.contains("GH_TOKEN"));
    }

    #[test]
    fn test_format_config_error() {
        let error = VigilError::Config {
            message: "No search queries configured".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("No search queries configured"));
        assert!(formatted.contains("config file at"));
    }

    #[test]
    fn test_format_document_error() {
        let error = VigilError::Document {
            message: "list markers not found".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("list markers not found"));
        assert!(formatted.contains("marker lines"));
    }

    #[test]
    fn test_format_io_error() {
        let error = VigilError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("I/O error"));
        assert!(formatted.contains("writable"));
    }

    #[test]
    fn test_format_non_vigil_error() {
        let error = anyhow::anyhow!("Some generic error");
        assert_eq!(format_error(&error), "Some generic error");
    }
}
