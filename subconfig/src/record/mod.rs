//! Configuration instances and the operations that move them to and from
//! raw mappings.
//!
//! - [`Record::new`] instantiates a schema from already-shaped values.
//! - [`Schema::from_mapping`](crate::Schema::from_mapping) reconciles an
//!   untyped mapping with a schema, building nested records recursively.
//! - [`Record::to_mapping`] flattens a record back to plain data.
//! - [`Schema::inherit`](crate::Schema::inherit) clones a record with
//!   shallow overrides.

mod construct;
mod flatten;
mod inherit;

use std::fmt;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::{ConfigError, ConfigResult, RawMapping, Schema, Value};

pub use inherit::overlay;

/// A value conforming to a [`Schema`]: one value per declared field.
///
/// Records are immutable once built. Equality compares the schema by
/// identity and the field values; the path a record was loaded from is
/// auxiliary and does not take part.
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: RawMapping,
    source: Option<Utf8PathBuf>,
}

impl Record {
    /// Instantiate `schema` with `values`.
    ///
    /// Values are used as given, so this is the direct-construction path: a
    /// registered subconfig must already hold a record of its nested schema
    /// (or of one extending it), or null when the field has a default.
    /// Omitted fields take their declared default; a mapping default of a
    /// subconfig is built into a record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownField`] for a key the schema does not
    /// declare, [`ConfigError::MissingField`] when a field without a default
    /// is omitted, and [`ConfigError::RequiredFieldNull`] or
    /// [`ConfigError::InvalidNestedType`] when a subconfig holds anything but
    /// a matching record. Failures from default factories propagate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use subconfig::{RawMapping, Record, Schema, Value};
    ///
    /// let schema = Schema::builder("NestedConfig").opaque("value").opaque("name").build();
    /// let mut values = RawMapping::new();
    /// values.insert("name".into(), Value::from("test"));
    /// values.insert("value".into(), Value::from(42));
    /// let record = Record::new(&schema, values)?;
    /// assert_eq!(record.field_names().collect::<Vec<_>>(), ["value", "name"]);
    /// # Ok::<_, subconfig::ConfigError>(())
    /// ```
    pub fn new(schema: &Arc<Schema>, mut values: RawMapping) -> ConfigResult<Self> {
        if let Some(unknown) = values.keys().find(|key| schema.field(key).is_none()) {
            return Err(ConfigError::UnknownField {
                schema: schema.name().to_owned(),
                field: unknown.clone(),
            });
        }
        let mut ordered = RawMapping::with_capacity(schema.fields().len());
        for field in schema.fields() {
            let nested = schema.subconfig(field.name());
            let value = match values.swap_remove(field.name()) {
                Some(value) => value,
                None => {
                    let default = field.default().resolve()?.ok_or_else(|| {
                        ConfigError::MissingField {
                            schema: schema.name().to_owned(),
                            field: field.name().to_owned(),
                        }
                    })?;
                    match (nested, default) {
                        (Some(inner), Value::Mapping(map)) => {
                            Value::Record(inner.from_mapping(map)?)
                        }
                        (_, other) => other,
                    }
                }
            };
            if let Some(inner) = nested {
                schema.check_subconfig(field, inner, &value)?;
            }
            ordered.insert(field.name().to_owned(), value);
        }
        Ok(Self {
            schema: Arc::clone(schema),
            values: ordered,
            source: None,
        })
    }

    /// Schema this record conforms to.
    #[must_use]
    pub const fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Value held by `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Nested record held by `field`, if it holds one.
    #[must_use]
    pub fn nested(&self, field: &str) -> Option<&Self> {
        self.get(field).and_then(Value::as_record)
    }

    /// Iterates field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Path this record was loaded from, when it came from a file.
    #[must_use]
    pub fn source_path(&self) -> Option<&Utf8Path> {
        self.source.as_deref()
    }

    pub(crate) fn with_source(mut self, path: Utf8PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    /// Flattens the record into `serde_json`'s tree.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        Value::Mapping(self.to_mapping()).to_json()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema) && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("schema", &self.schema.name())
            .field("values", &self.values)
            .field("source", &self.source)
            .finish()
    }
}
