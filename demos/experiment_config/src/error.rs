//! Error types for the `experiment_config` demo.

use thiserror::Error;

/// Errors raised by the demo commands.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Wraps configuration failures from `subconfig`.
    #[error("configuration error: {0}")]
    Configuration(#[from] subconfig::ConfigError),
    /// An override was not of the form `key=value`.
    #[error("override '{0}' must have the form key=value")]
    MalformedOverride(String),
    /// An override value was not valid YAML.
    #[error("override '{key}' has an invalid value: {source}")]
    OverrideValue {
        /// Field the override targets.
        key: String,
        /// YAML parse failure.
        #[source]
        source: serde_yaml::Error,
    },
    /// Rendering or writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// Rendering YAML for display failed.
    #[error("failed to render YAML: {0}")]
    Render(#[from] serde_yaml::Error),
}

/// Convenience alias for demo results.
pub type Result<T> = std::result::Result<T, DemoError>;
