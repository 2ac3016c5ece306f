//! Error types for hostenv operations.
//!
//! This module defines [`HostenvError`], the error type shared by the
//! registry, the resolver and the registry-file loader, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration errors are returned from the registration call that
//!   detects them; the registry is left unchanged
//! - Resolution errors are returned from `resolve` and carry the offending
//!   hostname or environment name
//! - Every variant exposes a stable machine-readable [`HostenvError::code`]

use std::path::PathBuf;
use thiserror::Error;

/// Code for malformed registration input.
pub const ERR_INVALID_ARGUMENT: &str = "ERR_INVALID_ARGUMENT";
/// Code for a second registration under an existing name.
pub const ERR_ENVIRONMENT_ALREADY_EXISTS: &str = "ERR_ENVIRONMENT_ALREADY_EXISTS";
/// Code for a hostname with no matching rule and no default.
pub const ERR_NO_MATCH_FOUND: &str = "ERR_NO_MATCH_FOUND";
/// Code for a resolved name with no registered overrides.
pub const ERR_NO_SUCH_ENVIRONMENT: &str = "ERR_NO_SUCH_ENVIRONMENT";
/// Code for a missing registry file.
pub const ERR_CONFIG_NOT_FOUND: &str = "ERR_CONFIG_NOT_FOUND";
/// Code for an unparseable registry file.
pub const ERR_CONFIG_PARSE: &str = "ERR_CONFIG_PARSE";
/// Code for I/O failures.
pub const ERR_IO: &str = "ERR_IO";
/// Code for anything else.
pub const ERR_UNKNOWN: &str = "ERR_UNKNOWN";

/// Core error type for hostenv operations.
#[derive(Debug, Error)]
pub enum HostenvError {
    /// Malformed registration input (empty name, uncompilable hostname pattern).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// `add_environment` was called twice with the same name.
    #[error("Environment \"{environment_name}\" already exists")]
    DuplicateEnvironment { environment_name: String },

    /// No hostname rule matched and no default environment is configured.
    #[error("No match found for hostname {hostname}")]
    NoMatchFound { hostname: String },

    /// Resolution reached a name that was never registered.
    #[error("No config for environment name \"{environment_name}\"")]
    UnknownEnvironment { environment_name: String },

    /// Registry file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse registry file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HostenvError {
    /// Shorthand for an [`HostenvError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => ERR_INVALID_ARGUMENT,
            Self::DuplicateEnvironment { .. } => ERR_ENVIRONMENT_ALREADY_EXISTS,
            Self::NoMatchFound { .. } => ERR_NO_MATCH_FOUND,
            Self::UnknownEnvironment { .. } => ERR_NO_SUCH_ENVIRONMENT,
            Self::ConfigNotFound { .. } => ERR_CONFIG_NOT_FOUND,
            Self::ConfigParseError { .. } => ERR_CONFIG_PARSE,
            Self::Io(_) => ERR_IO,
            Self::Other(_) => ERR_UNKNOWN,
        }
    }

    /// Whether this error came from hostname resolution rather than
    /// registration or loading.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::NoMatchFound { .. } | Self::UnknownEnvironment { .. }
        )
    }
}

/// Result type alias for hostenv operations.
pub type Result<T> = std::result::Result<T, HostenvError>;
