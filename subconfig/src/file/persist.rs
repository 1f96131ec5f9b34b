//! YAML persistence for schemas and records.

use std::sync::Arc;

use camino::Utf8Path;

use super::{load_mapping, save_mapping};
use crate::{ConfigResult, Record, Schema};

impl Schema {
    /// Load a record of this schema from the YAML file at `path`.
    ///
    /// The returned record remembers `path` as its
    /// [source](Record::source_path).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::File`] when the file cannot be read or
    /// parsed, and otherwise fails like [`Schema::from_mapping`].
    pub fn from_yaml(self: &Arc<Self>, path: impl AsRef<Utf8Path>) -> ConfigResult<Record> {
        let file = path.as_ref();
        let raw = load_mapping(file)?;
        Ok(self.from_mapping(raw)?.with_source(file.to_owned()))
    }
}

impl Record {
    /// Flatten the record and write it to `path` as YAML.
    ///
    /// # Errors
    ///
    /// Fails like [`crate::save_mapping`].
    pub fn to_yaml(&self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        save_mapping(path, &self.to_mapping())
    }
}
