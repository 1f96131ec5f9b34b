//! Cloning records with shallow overrides.

use std::sync::Arc;

use crate::{ConfigResult, RawMapping, Record, Schema};

/// Overlay `overrides` onto `target`, key by key.
///
/// Existing keys keep their position and take the override value; new keys
/// are appended. The overlay is shallow: an override for a nested mapping
/// replaces the whole subtree.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use subconfig::{Value, overlay};
///
/// let mut target = Value::from(json!({"a": 1, "b": {"x": 1}})).into_mapping()?;
/// let overrides = Value::from(json!({"b": {"y": 2}, "c": 3})).into_mapping()?;
/// overlay(&mut target, overrides);
/// assert_eq!(Value::Mapping(target).to_json(), json!({"a": 1, "b": {"y": 2}, "c": 3}));
/// # Ok::<_, subconfig::ConfigError>(())
/// ```
pub fn overlay(target: &mut RawMapping, overrides: RawMapping) {
    for (key, value) in overrides {
        target.insert(key, value);
    }
}

impl Schema {
    /// Build a record of this schema from `parent` with `overrides` applied.
    ///
    /// `parent` is flattened, `overrides` are overlaid with [`overlay`], and
    /// the merged mapping goes through [`Schema::from_mapping`]. An override
    /// for a nested field must be a complete mapping, a record of the nested
    /// schema, or null.
    ///
    /// # Errors
    ///
    /// Fails exactly like [`Schema::from_mapping`] on the merged mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use subconfig::{Schema, Value};
    ///
    /// let schema = Schema::builder("RunConfig").opaque("name").opaque("epochs").build();
    /// let parent = schema.from_mapping(
    ///     Value::from(json!({"name": "parent", "epochs": 10})).into_mapping()?,
    /// )?;
    /// let child = schema.inherit(
    ///     &parent,
    ///     Value::from(json!({"name": "child"})).into_mapping()?,
    /// )?;
    /// assert_eq!(child.get("name"), Some(&Value::from("child")));
    /// assert_eq!(child.get("epochs"), parent.get("epochs"));
    /// # Ok::<_, subconfig::ConfigError>(())
    /// ```
    pub fn inherit(
        self: &Arc<Self>,
        parent: &Record,
        overrides: RawMapping,
    ) -> ConfigResult<Record> {
        let mut merged = parent.to_mapping();
        overlay(&mut merged, overrides);
        self.from_mapping(merged)
    }
}
