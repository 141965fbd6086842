// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Configuration error types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {key}")]
    MissingRequired { key: String },

    #[error("Invalid type for {key}: '{value}' is not a valid {expected}")]
    TypeMismatch {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Never produced by `normalize_origins`: the comma-split fallback
    /// accepts any text.
    #[error("Malformed list for {key}: '{value}'")]
    MalformedList { key: String, value: String },

    #[error("Invalid value for {key}: '{value}' - {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

impl ConfigError {
    /// Name of the setting the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequired { key }
            | ConfigError::TypeMismatch { key, .. }
            | ConfigError::MalformedList { key, .. }
            | ConfigError::InvalidValue { key, .. } => Some(key),
            ConfigError::EnvFile { .. } => None,
        }
    }
}
