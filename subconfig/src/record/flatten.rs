//! Flattening records back into raw mappings.

use crate::{RawMapping, Record, Value};

impl Record {
    /// Flatten the record into a plain mapping.
    ///
    /// Every declared field appears, in declaration order. Registered
    /// subconfigs holding a record are flattened recursively; every other
    /// value, including null, is copied unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use subconfig::{Schema, Value};
    ///
    /// let nested = Schema::builder("NestedConfig").opaque("value").build();
    /// let outer = Schema::builder("OuterConfig")
    ///     .opaque("name")
    ///     .optional_nested("extra", &nested)
    ///     .build();
    /// let raw = Value::from(json!({"name": "outer"})).into_mapping()?;
    /// let flat = outer.from_mapping(raw)?.to_mapping();
    /// assert_eq!(Value::Mapping(flat).to_json(), json!({"name": "outer", "extra": null}));
    /// # Ok::<_, subconfig::ConfigError>(())
    /// ```
    #[must_use]
    pub fn to_mapping(&self) -> RawMapping {
        self.values
            .iter()
            .map(|(key, value)| {
                let flat = match value {
                    Value::Record(nested) if self.schema.subconfig(key).is_some() => {
                        Value::Mapping(nested.to_mapping())
                    }
                    other => other.clone(),
                };
                (key.clone(), flat)
            })
            .collect()
    }
}
