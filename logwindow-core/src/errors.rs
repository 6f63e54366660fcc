use std::io;

use thiserror::Error;

/// Result type used across the LogWindow core crate.
pub type Result<T> = std::result::Result<T, LogWindowError>;

/// Canonical error representation shared by the service and the client.
#[derive(Debug, Error)]
pub enum LogWindowError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("dataset error at line {line}: {message}")]
    DatasetError { line: usize, message: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("general error: {0}")]
    GeneralError(String),
}

impl LogWindowError {
    pub fn dataset(line: usize, message: impl Into<String>) -> Self {
        LogWindowError::DatasetError {
            line,
            message: message.into(),
        }
    }
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {key}: {source}")]
    InvalidEnvVar {
        key: String,
        #[source]
        source: std::env::VarError,
    },
}

impl From<ConfigError> for LogWindowError {
    fn from(value: ConfigError) -> Self {
        LogWindowError::ConfigError(value.to_string())
    }
}
