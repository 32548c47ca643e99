//! Error types and exit codes for notegather
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or configuration error (bad flags, invalid limits)
//! - 3: Data error (missing vault, unknown root note)
//!
//! Most failures during discovery are not errors at all: unresolved
//! references are dropped, query extension failures and unreadable linked
//! notes are logged and skipped. Only configuration errors and a failure to
//! read the root note surface here.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or configuration error (2)
    Usage = 2,
    /// Data error - missing vault or note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notegather operations
#[derive(Error, Debug)]
pub enum GatherError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid header format {format:?}: {reason}")]
    InvalidHeaderFormat { format: String, reason: String },

    // Data errors (exit code 3)
    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("query extension failed: {0}")]
    Query(String),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GatherError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GatherError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GatherError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GatherError::UsageError(_)
            | GatherError::InvalidValue { .. }
            | GatherError::InvalidHeaderFormat { .. } => ExitCode::Usage,

            GatherError::VaultNotFound { .. } | GatherError::NoteNotFound { .. } => {
                ExitCode::Data
            }

            GatherError::Io(_)
            | GatherError::Json(_)
            | GatherError::Toml(_)
            | GatherError::Query(_)
            | GatherError::FailedOperationWithTarget { .. }
            | GatherError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GatherError::UsageError(_) => "usage_error",
            GatherError::InvalidValue { .. } => "invalid_value",
            GatherError::InvalidHeaderFormat { .. } => "invalid_header_format",
            GatherError::VaultNotFound { .. } => "vault_not_found",
            GatherError::NoteNotFound { .. } => "note_not_found",
            GatherError::Io(_) => "io_error",
            GatherError::Json(_) => "json_error",
            GatherError::Toml(_) => "toml_error",
            GatherError::Query(_) => "query_error",
            GatherError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GatherError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for notegather operations
pub type Result<T> = std::result::Result<T, GatherError>;
