//! Core error types for studytrack-core.
//!
//! The analytics calculators never fail; these errors come from the
//! collaborators around them (storage, configuration, credentials and
//! record validation).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studytrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Credential errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Student store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the store file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the store file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A student with this email is already registered
    #[error("A student with email '{0}' already exists")]
    DuplicateStudent(String),

    /// No student registered under this email
    #[error("No student with email '{0}'")]
    StudentNotFound(String),

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Value outside its allowed range
    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Unrecognized task status
    #[error("Unknown task status: {0}")]
    UnknownStatus(String),

    /// Unrecognized session type
    #[error("Unknown session type: {0}")]
    UnknownSessionType(String),

    /// Task id not present for this student
    #[error("Task {0} not found")]
    TaskNotFound(u32),

    /// Course id not present for this student
    #[error("Course '{0}' not found")]
    CourseNotFound(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Credential errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email/password pair did not verify
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Stored hash is not in the expected `salt$digest` form
    #[error("Malformed password hash")]
    MalformedHash,

    /// Password rejected before hashing
    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
