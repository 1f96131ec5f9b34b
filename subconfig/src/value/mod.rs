//! Untyped values exchanged with the constructor and the flattener.
//!
//! A [`RawMapping`] is the external, string-keyed representation of a
//! configuration record: what YAML documents parse into and what
//! [`crate::Record::to_mapping`] produces. Values keep insertion order so a
//! flattened record lists its fields in declaration order.
//!
//! Besides plain data, a [`Value`] may carry an already-built
//! [`Record`]. The constructor accepts such values for nested fields and
//! passes them through untouched.

mod codec;

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, Record};

pub use codec::ValueDeserializer;

/// Untyped, string-keyed, insertion-ordered mapping.
pub type RawMapping = IndexMap<String, Value>;

/// A node in a raw configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Explicit null (`~` or `null` in YAML).
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Integer(i64),
    /// Integer scalar above `i64::MAX`.
    Unsigned(u64),
    /// Floating point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Nested raw mapping.
    Mapping(RawMapping),
    /// An instance that has already been constructed against a schema.
    Record(Record),
}

/// Shape of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Integer`].
    Integer,
    /// [`Value::Unsigned`].
    Unsigned,
    /// [`Value::Float`].
    Float,
    /// [`Value::String`].
    String,
    /// [`Value::Sequence`].
    Sequence,
    /// [`Value::Mapping`].
    Mapping,
    /// [`Value::Record`].
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Unsigned => "unsigned integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the shape of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Unsigned(_) => ValueKind::Unsigned,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Record(_) => ValueKind::Record,
        }
    }

    /// Describes the value for error messages, naming the schema of records.
    ///
    /// # Examples
    ///
    /// ```
    /// use subconfig::Value;
    /// assert_eq!(Value::from(3).describe(), "integer");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Record(record) => format!("record '{}'", record.schema().name()),
            other => other.kind().to_string(),
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrows the mapping when this value is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&RawMapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrows the record when this value is one.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrows the string when this value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer when this value is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the integer when this value is a non-negative one.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(i) => u64::try_from(*i).ok(),
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Converts the value into a mapping.
    ///
    /// Records are flattened, so the result is always plain data.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAMapping`] for any other shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use subconfig::Value;
    ///
    /// let map = Value::from(json!({"root": "/data"})).into_mapping()?;
    /// assert_eq!(map["root"], Value::from("/data"));
    /// # Ok::<_, subconfig::ConfigError>(())
    /// ```
    pub fn into_mapping(self) -> ConfigResult<RawMapping> {
        match self {
            Self::Mapping(map) => Ok(map),
            Self::Record(record) => Ok(record.to_mapping()),
            other => Err(ConfigError::NotAMapping {
                found: other.kind(),
            }),
        }
    }

    /// Serialises any `T` into a plain [`Value`] tree.
    ///
    /// The value passes through `serde_yaml`'s tree, so unsigned integers
    /// and non-finite floats are kept. Enum variants carrying data become
    /// single-key mappings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] when `T` cannot be represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use subconfig::Value;
    /// assert_eq!(Value::from_serialize(&u64::MAX)?, Value::Unsigned(u64::MAX));
    /// # Ok::<_, subconfig::ConfigError>(())
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> ConfigResult<Self> {
        Ok(Self::deserialize(serde_yaml::to_value(value)?)?)
    }

    /// Reads a typed value out of the tree, flattening records on the way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when the tree does not fit `T`.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> ConfigResult<T> {
        let deserializer: ValueDeserializer<de::value::Error> = self.into_deserializer();
        Ok(T::deserialize(deserializer)?)
    }

    /// Converts the value into `serde_json`'s tree, flattening records.
    ///
    /// Non-finite floats have no JSON representation and become null; use
    /// [`Value::deserialize_into`] to read typed values without loss.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Integer(i) => serde_json::Value::from(*i),
            Self::Unsigned(u) => serde_json::Value::from(*u),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Sequence(items) => items.iter().map(Self::to_json).collect(),
            Self::Mapping(map) => mapping_to_json(map),
            Self::Record(record) => mapping_to_json(&record.to_mapping()),
        }
    }
}

fn mapping_to_json(map: &RawMapping) -> serde_json::Value {
    serde_json::Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect(),
    )
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_u64().map(Self::Unsigned))
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Self::Unsigned(u), Self::Integer)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<RawMapping> for Value {
    fn from(map: RawMapping) -> Self {
        Self::Mapping(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests;
