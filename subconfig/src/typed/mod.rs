//! Statically typed configuration structs backed by a [`Schema`].
//!
//! [`ConfigSchema`] connects a Rust struct to the dynamic machinery: the
//! struct describes its field table once, and construction, flattening,
//! inheritance and YAML persistence all run through the same
//! [`Schema::from_mapping`] and [`Record::to_mapping`] paths that untyped
//! records use. Values cross between the two worlds through `serde`.
//!
//! The trait is normally implemented with `#[derive(ConfigSchema)]`.

mod loaded;

use std::sync::Arc;

use camino::Utf8Path;
use serde::{Serialize, de::DeserializeOwned};

use crate::{ConfigResult, RawMapping, Record, Schema, Value};

pub use loaded::Loaded;

/// A struct usable as a nested configuration record.
///
/// Only [`ConfigSchema::schema`] is required; every other method has a
/// default built on it.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use subconfig::ConfigSchema;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
/// struct DataConfig {
///     root: String,
/// }
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
/// struct ExperimentConfig {
///     exp_id: String,
///     #[config(nested)]
///     data: DataConfig,
/// }
///
/// let raw = subconfig::Value::from(serde_json::json!({
///     "exp_id": "exp-001",
///     "data": {"root": "/datasets"},
///     "unused": 1,
/// }))
/// .into_mapping()?;
/// let config = ExperimentConfig::from_mapping(raw)?;
/// assert_eq!(config.data.root, "/datasets");
/// assert_eq!(ExperimentConfig::from_mapping(config.to_mapping()?)?, config);
/// # Ok::<_, subconfig::ConfigError>(())
/// ```
pub trait ConfigSchema: Serialize + DeserializeOwned {
    /// Schema describing this type. Implementations build it once and hand
    /// out shared handles.
    fn schema() -> Arc<Schema>;

    /// Construct from an untyped mapping, dropping unknown keys.
    ///
    /// # Errors
    ///
    /// Fails like [`Schema::from_mapping`], or with
    /// [`crate::ConfigError::Deserialize`] when a value does not fit the
    /// Rust field type.
    fn from_mapping(raw: RawMapping) -> ConfigResult<Self> {
        Self::from_record(&Self::schema().from_mapping(raw)?)
    }

    /// Convert a dynamic record into this type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Deserialize`] when the record's values
    /// do not fit the Rust field types.
    fn from_record(record: &Record) -> ConfigResult<Self> {
        Value::Mapping(record.to_mapping()).deserialize_into()
    }

    /// Convert into a dynamic record of [`ConfigSchema::schema`].
    ///
    /// # Errors
    ///
    /// Fails when the value cannot be serialised or does not conform to its
    /// own schema, for example a hand-written schema that disagrees with the
    /// struct.
    fn to_record(&self) -> ConfigResult<Record> {
        let raw = Value::from_serialize(self)?.into_mapping()?;
        Self::schema().from_mapping(raw)
    }

    /// Flatten into a plain mapping with every declared field present.
    ///
    /// # Errors
    ///
    /// Fails like [`ConfigSchema::to_record`].
    fn to_mapping(&self) -> ConfigResult<RawMapping> {
        Ok(self.to_record()?.to_mapping())
    }

    /// Build a new instance from `parent` with `overrides` applied shallowly.
    ///
    /// `parent` may be of any configuration type; its flattened fields are
    /// reconciled with this type's schema.
    ///
    /// # Errors
    ///
    /// Fails like [`Schema::inherit`] followed by
    /// [`ConfigSchema::from_record`].
    fn inherit<P: ConfigSchema>(parent: &P, overrides: RawMapping) -> ConfigResult<Self> {
        let merged = Self::schema().inherit(&parent.to_record()?, overrides)?;
        Self::from_record(&merged)
    }

    /// Load from the YAML file at `path`, remembering where it came from.
    ///
    /// # Errors
    ///
    /// Fails like [`Schema::from_yaml`] followed by
    /// [`ConfigSchema::from_record`].
    fn from_yaml(path: impl AsRef<Utf8Path>) -> ConfigResult<Loaded<Self>> {
        let record = Self::schema().from_yaml(path)?;
        let value = Self::from_record(&record)?;
        Ok(Loaded::new(value, record.source_path().map(Utf8Path::to_owned)))
    }

    /// Flatten and write to `path` as YAML.
    ///
    /// # Errors
    ///
    /// Fails like [`ConfigSchema::to_record`] and [`crate::save_mapping`].
    fn to_yaml(&self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        self.to_record()?.to_yaml(path)
    }
}
