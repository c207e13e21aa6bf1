//! Error types and exit codes for pagezettel
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid template definition)
//! - 3: Data/vault error (missing vault, unreadable settings, path collision)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pagezettel binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/vault error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pagezettel operations
#[derive(Error, Debug)]
pub enum ZettelError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid template: {reason}")]
    InvalidTemplate { reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/vault errors (exit code 3)
    #[error("vault not found (searched from {search_root:?}); run `pagezettel init` first")]
    VaultNotFound { search_root: PathBuf },

    #[error("invalid settings in {path:?}: {reason}")]
    InvalidSettings { path: PathBuf, reason: String },

    #[error("template not found: {query}")]
    TemplateNotFound { query: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ZettelError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ZettelError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ZettelError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        ZettelError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        ZettelError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error reports that the target path is already taken
    pub fn is_already_exists(&self) -> bool {
        match self {
            ZettelError::AlreadyExists { .. } => true,
            ZettelError::Io(err) => err.kind() == std::io::ErrorKind::AlreadyExists,
            _ => false,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ZettelError::UnknownFormat(_)
            | ZettelError::UsageError(_)
            | ZettelError::InvalidTemplate { .. }
            | ZettelError::InvalidValue { .. } => ExitCode::Usage,

            ZettelError::VaultNotFound { .. }
            | ZettelError::InvalidSettings { .. }
            | ZettelError::TemplateNotFound { .. }
            | ZettelError::AlreadyExists { .. }
            | ZettelError::NotFound { .. } => ExitCode::Data,

            ZettelError::Io(_)
            | ZettelError::Yaml(_)
            | ZettelError::Json(_)
            | ZettelError::Toml(_)
            | ZettelError::FailedOperationWithTarget { .. }
            | ZettelError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ZettelError::UnknownFormat(_) => "unknown_format",
            ZettelError::UsageError(_) => "usage_error",
            ZettelError::InvalidTemplate { .. } => "invalid_template",
            ZettelError::InvalidValue { .. } => "invalid_value",
            ZettelError::VaultNotFound { .. } => "vault_not_found",
            ZettelError::InvalidSettings { .. } => "invalid_settings",
            ZettelError::TemplateNotFound { .. } => "template_not_found",
            ZettelError::AlreadyExists { .. } => "already_exists",
            ZettelError::NotFound { .. } => "not_found",
            ZettelError::Io(_) => "io_error",
            ZettelError::Yaml(_) => "yaml_error",
            ZettelError::Json(_) => "json_error",
            ZettelError::Toml(_) => "toml_error",
            ZettelError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ZettelError::Other(_) => "other",
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

/// Result type alias for pagezettel operations
pub type Result<T> = std::result::Result<T, ZettelError>;
