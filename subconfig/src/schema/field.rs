//! Field declarations making up a schema's field table.

use std::sync::Arc;

use super::Schema;
use crate::{ConfigResult, Value};

/// Reference from a field type to another schema.
#[derive(Clone, Debug)]
pub enum SchemaRef {
    /// A schema that is already built.
    Resolved(Arc<Schema>),
    /// A schema known only by name, looked up in a
    /// [`crate::SchemaRegistry`] when the declaring schema is registered.
    Named(String),
}

impl SchemaRef {
    /// Name of the referenced schema.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Resolved(schema) => schema.name(),
            Self::Named(name) => name,
        }
    }
}

/// Declared type of a field.
///
/// Only the shapes the registry needs are distinguished: whether a field is a
/// nested record, possibly wrapped in an optional or union type. Everything
/// else is [`FieldType::Opaque`] and passes through construction and
/// flattening unchanged.
#[derive(Clone, Debug)]
pub enum FieldType {
    /// Scalar or collection value with no nested schema.
    Opaque,
    /// Another configuration record.
    Record(SchemaRef),
    /// The inner type or null.
    Optional(Box<FieldType>),
    /// One of several alternatives, inspected in order.
    Union(Vec<FieldType>),
}

impl FieldType {
    /// Nested record of an already-built schema.
    #[must_use]
    pub fn record(schema: &Arc<Schema>) -> Self {
        Self::Record(SchemaRef::Resolved(Arc::clone(schema)))
    }

    /// Nested record of a schema referenced by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Record(SchemaRef::Named(name.into()))
    }

    /// `inner` or null.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Union of `alternatives`.
    #[must_use]
    pub fn union(alternatives: impl IntoIterator<Item = Self>) -> Self {
        Self::Union(alternatives.into_iter().collect())
    }
}

/// Default attached to a field declaration.
#[derive(Clone, Debug)]
pub enum FieldDefault {
    /// The field must be supplied.
    Required,
    /// A fixed default value.
    Value(Value),
    /// A default computed each time a record is instantiated.
    Factory(fn() -> ConfigResult<Value>),
}

impl FieldDefault {
    /// Returns `true` unless the field is [`FieldDefault::Required`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Required)
    }

    /// Produces the default value, or `None` for required fields.
    ///
    /// # Errors
    ///
    /// Propagates failures raised by a [`FieldDefault::Factory`].
    pub fn resolve(&self) -> ConfigResult<Option<Value>> {
        match self {
            Self::Required => Ok(None),
            Self::Value(value) => Ok(Some(value.clone())),
            Self::Factory(make) => make().map(Some),
        }
    }
}

/// One `(name, type, default)` entry of a schema.
#[derive(Clone, Debug)]
pub struct FieldDef {
    name: String,
    ty: FieldType,
    default: FieldDefault,
}

impl FieldDef {
    /// Declare a required field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: FieldDefault::Required,
        }
    }

    /// Attach a fixed default.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = FieldDefault::Value(value.into());
        self
    }

    /// Attach a default factory.
    #[must_use]
    pub fn with_default_fn(mut self, make: fn() -> ConfigResult<Value>) -> Self {
        self.default = FieldDefault::Factory(make);
        self
    }

    /// Field name as it appears in raw mappings.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn ty(&self) -> &FieldType {
        &self.ty
    }

    /// Declared default.
    #[must_use]
    pub const fn default(&self) -> &FieldDefault {
        &self.default
    }

    /// Returns `true` when the field may be omitted or set to null.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_present()
    }
}
