//! Primary error enum for configuration construction and file handling.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::value::ValueKind;

/// Result alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while constructing or persisting configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A nested field without a default received an explicit null.
    #[error("required subconfig '{field}' of '{schema}' cannot be null")]
    RequiredFieldNull {
        /// Schema that declares the field.
        schema: String,
        /// Name of the nested field.
        field: String,
    },

    /// A nested field received a value that is neither a mapping, null, nor
    /// an instance of the registered nested schema.
    #[error("invalid type for '{field}' of '{schema}': expected {expected} or a mapping, found {found}")]
    InvalidNestedType {
        /// Schema that declares the field.
        schema: String,
        /// Name of the nested field.
        field: String,
        /// Name of the registered nested schema.
        expected: String,
        /// Description of the value that was supplied.
        found: String,
    },

    /// A declared field without a default was not supplied.
    #[error("missing field '{field}' for '{schema}'")]
    MissingField {
        /// Schema being instantiated.
        schema: String,
        /// Name of the absent field.
        field: String,
    },

    /// A value was supplied for a field the schema does not declare.
    #[error("unknown field '{field}' for '{schema}'")]
    UnknownField {
        /// Schema being instantiated.
        schema: String,
        /// Name of the unexpected field.
        field: String,
    },

    /// A value that must be a mapping had another shape.
    #[error("expected a mapping, found {found}")]
    NotAMapping {
        /// Shape of the value that was supplied.
        found: ValueKind,
    },

    /// Typed instantiation through serde failed.
    #[error(transparent)]
    Deserialize(#[from] serde::de::value::Error),

    /// YAML conversion failed outside of a file, for example while turning
    /// a typed value into a raw value tree.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading, parsing, or writing.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
