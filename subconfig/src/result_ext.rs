//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| ConfigError::…(e))`
//! patterns when converting external error types into the crate's
//! [`ConfigResult`] alias.
//!
//! - Use [`ConfigResultExt::into_config`] for error types that implement
//!   `Into<ConfigError>` (e.g., `serde_yaml::Error`).
//! - Use [`FileResultExt::for_file`] for failures that should be attributed to
//!   a configuration file path.
//!
//! # Examples
//!
//! ```
//! use subconfig::{ConfigResult, ConfigResultExt};
//!
//! fn serialize() -> ConfigResult<serde_yaml::Value> {
//!     // serde_yaml::Error implements Into<ConfigError>
//!     serde_yaml::to_value(42).into_config()
//! }
//! # serialize().expect("integers serialise");
//! ```

use std::error::Error;

use camino::Utf8Path;

use crate::{ConfigError, ConfigResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ConfigError>` into a [`ConfigResult<T>`].
pub trait ConfigResultExt<T, E> {
    /// Convert `Result<T, E>` into `ConfigResult<T>` using `Into<ConfigError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`ConfigError`].
    fn into_config(self) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T, E> for Result<T, E>
where
    E: Into<ConfigError>,
{
    fn into_config(self) -> ConfigResult<T> {
        self.map_err(Into::into)
    }
}

/// Extension attributing failures to a configuration file.
pub trait FileResultExt<T> {
    /// Convert the error into [`ConfigError::File`] for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] wrapping the original error when the
    /// input is `Err`.
    fn for_file(self, path: &Utf8Path) -> ConfigResult<T>;
}

impl<T, E> FileResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn for_file(self, path: &Utf8Path) -> ConfigResult<T> {
        self.map_err(|err| ConfigError::file(path, err))
    }
}
