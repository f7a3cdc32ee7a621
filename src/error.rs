//! Error types and handling infrastructure for draftboard.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Context preservation**: Include relevant information for debugging
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for draftboard operations.
///
/// This enum covers all possible error conditions that can occur while
/// loading a board file, revealing picks, and driving the terminal UI.
#[derive(Error, Debug)]
pub enum DraftboardError {
    /// File system related errors (file not found, permission denied, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Board file not found specifically (common case for user feedback)
    #[error("Board file not found: {path}")]
    BoardFileNotFound { path: PathBuf },

    /// Board file parsing or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A pick record that cannot be rendered (e.g. empty name)
    #[error("Invalid pick: {message}")]
    InvalidPick { message: String },

    /// Errors raised by a render target while mutating a slot
    #[error("Render operation failed: {message}")]
    RenderError { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for draftboard operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the draftboard codebase.
pub type Result<T> = std::result::Result<T, DraftboardError>;

impl DraftboardError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidPick error with a descriptive message
    pub fn invalid_pick(message: impl Into<String>) -> Self {
        Self::InvalidPick {
            message: message.into(),
        }
    }

    /// Create a RenderError with a descriptive message
    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to DraftboardError
impl From<std::io::Error> for DraftboardError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/test/board.toml");

        let not_found = DraftboardError::BoardFileNotFound { path: path.clone() };
        assert_eq!(
            not_found.to_string(),
            "Board file not found: /test/board.toml"
        );

        let config_err = DraftboardError::config("missing picks table");
        assert_eq!(
            config_err.to_string(),
            "Configuration error: missing picks table"
        );

        let render_err = DraftboardError::render("slot rejected background");
        assert_eq!(
            render_err.to_string(),
            "Render operation failed: slot rejected background"
        );
    }

    #[test]
    fn test_error_constructors() {
        let pick_err = DraftboardError::invalid_pick("empty name");
        matches!(pick_err, DraftboardError::InvalidPick { .. });

        let ui_err = DraftboardError::ui("terminal resize failed");
        matches!(ui_err, DraftboardError::UIError { .. });

        let other_err = DraftboardError::other("unknown error");
        matches!(other_err, DraftboardError::Other { .. });
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let board_err: DraftboardError = io_err.into();

        match board_err {
            DraftboardError::FileError { message, .. } => {
                assert_eq!(message, "File not found");
            }
            _ => panic!("Expected FileError variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        let result = returns_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }
}
