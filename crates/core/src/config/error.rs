//! Error types for settings loading.
//!
//! [`SchemaError`] covers documents that parse but do not match the settings
//! schema. [`ConfigError`] wraps it together with syntax and I/O failures.

use crate::config::format::DocumentFormat;
use std::path::PathBuf;
use thiserror::Error;

/// A document that parsed but does not describe valid settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required key is absent.
    #[error("Missing required key `{key}`")]
    MissingRequiredKey { key: String },

    /// A value is outside its enumeration.
    #[error("Invalid value {value} for `{key}`: expected one of {expected}")]
    InvalidEnum {
        key: String,
        value: String,
        expected: String,
    },

    /// A value has the wrong container or scalar type.
    #[error("Invalid shape for `{key}`: expected {expected}, found {found}")]
    InvalidShape {
        key: String,
        expected: String,
        found: String,
    },

    /// A plugin identifier that is not in the recognized set.
    #[error("Unknown plugin `{name}`")]
    UnknownPlugin { name: String },
}

impl SchemaError {
    /// The dotted path of the offending key, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            SchemaError::MissingRequiredKey { key }
            | SchemaError::InvalidEnum { key, .. }
            | SchemaError::InvalidShape { key, .. } => Some(key),
            SchemaError::UnknownPlugin { .. } => None,
        }
    }
}

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a settings file from disk.
    #[error("Failed to read settings file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file extension does not map to a known document format.
    #[error("Unsupported settings file {path}: expected a .yaml, .yml, .json or .toml extension")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to parse YAML.
    #[error("Failed to parse YAML settings: {source}")]
    YamlParse { source: serde_yaml::Error },

    /// Failed to parse JSON.
    #[error("Failed to parse JSON settings: {source}")]
    JsonParse { source: serde_json::Error },

    /// Failed to parse TOML.
    #[error("Failed to parse TOML settings: {source}")]
    TomlParse { source: toml::de::Error },

    /// YAML parsed but contains a value with no JSON-compatible form.
    #[error("Unsupported YAML value at `{key}`: {reason}")]
    UnsupportedYaml { key: String, reason: String },

    /// Failed to write settings back out.
    #[error("Failed to render settings as {format}: {reason}")]
    Render {
        format: DocumentFormat,
        reason: String,
    },

    /// The document does not match the settings schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ConfigError {
    /// The schema violation behind this error, if it is one.
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            ConfigError::Schema(err) => Some(err),
            _ => None,
        }
    }
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
