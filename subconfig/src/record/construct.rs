//! Construction of records from raw mappings.

use std::sync::Arc;

use tracing::trace;

use crate::{ConfigError, ConfigResult, FieldDef, RawMapping, Record, Schema, Value};

impl Schema {
    /// Build a record of this schema from an untyped mapping.
    ///
    /// Keys that do not name a declared field are dropped. Values for
    /// registered subconfigs are reconciled with the nested schema:
    ///
    /// - a mapping is constructed recursively;
    /// - a record of the nested schema (or of one extending it) is kept as is;
    /// - null is accepted only when the field has a default.
    ///
    /// Every other field passes through unchanged. The filtered values are
    /// then instantiated with [`Record::new`], which also builds mapping
    /// defaults of omitted nested fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RequiredFieldNull`] when a nested field without
    /// a default is null, [`ConfigError::InvalidNestedType`] when a nested
    /// field holds anything else that is not a mapping or matching record,
    /// and propagates instantiation failures such as
    /// [`ConfigError::MissingField`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use subconfig::{Schema, Value};
    ///
    /// let data = Schema::builder("DataConfig").opaque("root").build();
    /// let experiment = Schema::builder("ExperimentConfig")
    ///     .opaque("exp_id")
    ///     .nested("data", &data)
    ///     .build();
    ///
    /// let raw = Value::from(json!({
    ///     "exp_id": "exp-001",
    ///     "data": {"root": "/datasets"},
    ///     "comment": "ignored",
    /// }))
    /// .into_mapping()?;
    /// let record = experiment.from_mapping(raw)?;
    /// let nested = record.nested("data").expect("data is a record");
    /// assert_eq!(nested.get("root"), Some(&Value::from("/datasets")));
    /// assert!(record.get("comment").is_none());
    /// # Ok::<_, subconfig::ConfigError>(())
    /// ```
    pub fn from_mapping(self: &Arc<Self>, raw: RawMapping) -> ConfigResult<Record> {
        let mut filtered = RawMapping::with_capacity(raw.len());
        for (key, value) in raw {
            let Some(field) = self.field(&key) else {
                continue;
            };
            let value = match self.subconfig(&key) {
                Some(nested) => self.build_subconfig(field, nested, value)?,
                None => value,
            };
            filtered.insert(key, value);
        }
        Record::new(self, filtered)
    }

    fn build_subconfig(
        &self,
        field: &FieldDef,
        nested: &Arc<Self>,
        value: Value,
    ) -> ConfigResult<Value> {
        if let Value::Mapping(map) = value {
            trace!(
                schema = self.name(),
                field = field.name(),
                nested = nested.name(),
                "building subconfig"
            );
            return nested.from_mapping(map).map(Value::Record);
        }
        self.check_subconfig(field, nested, &value)?;
        if value.as_record().is_some() {
            trace!(
                schema = self.name(),
                field = field.name(),
                "keeping prebuilt subconfig"
            );
        }
        Ok(value)
    }

    /// Checks that `value` may be stored in the subconfig `field`.
    pub(super) fn check_subconfig(
        &self,
        field: &FieldDef,
        nested: &Self,
        value: &Value,
    ) -> ConfigResult<()> {
        match value {
            Value::Null if field.has_default() => Ok(()),
            Value::Null => Err(ConfigError::RequiredFieldNull {
                schema: self.name().to_owned(),
                field: field.name().to_owned(),
            }),
            Value::Record(record) if record.schema().is_a(nested) => Ok(()),
            other => Err(ConfigError::InvalidNestedType {
                schema: self.name().to_owned(),
                field: field.name().to_owned(),
                expected: nested.name().to_owned(),
                found: other.describe(),
            }),
        }
    }
}
