//! Schema descriptors: the statically declared field table of a
//! configuration record, plus the subconfig map computed from it.
//!
//! Schemas are declared once, either by hand through [`SchemaBuilder`] or by
//! `#[derive(ConfigSchema)]`, and shared as `Arc<Schema>`. Building a schema
//! registers its nested fields; the resulting [`SubconfigMap`] drives every
//! later construction and flattening decision.
//!
//! # Example
//!
//! ```rust
//! use subconfig::{FieldDef, FieldType, Schema};
//!
//! let data = Schema::builder("DataConfig").opaque("root").build();
//! let experiment = Schema::builder("ExperimentConfig")
//!     .opaque("exp_id")
//!     .nested("data", &data)
//!     .field(FieldDef::new("notes", FieldType::Opaque).with_default("none"))
//!     .build();
//!
//! assert_eq!(experiment.subconfig("data").map(|s| s.name()), Some("DataConfig"));
//! assert!(experiment.subconfig("exp_id").is_none());
//! ```

mod field;
mod registry;
mod subconfigs;

use std::fmt;
use std::sync::Arc;

pub use field::{FieldDef, FieldDefault, FieldType, SchemaRef};
pub use registry::SchemaRegistry;
pub use subconfigs::{SubconfigMap, nested_schema};

/// Field table and subconfig map of one configuration record type.
pub struct Schema {
    name: String,
    fields: Vec<FieldDef>,
    subconfigs: SubconfigMap,
    parent: Option<Arc<Schema>>,
}

impl Schema {
    /// Start declaring a schema called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Schema name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in declaration order, inherited fields first.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a declared field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Iterates declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDef::name)
    }

    /// Field name to nested schema, for every registered subconfig.
    #[must_use]
    pub const fn subconfigs(&self) -> &SubconfigMap {
        &self.subconfigs
    }

    /// Nested schema registered for `field`, if any.
    #[must_use]
    pub fn subconfig(&self, field: &str) -> Option<&Arc<Self>> {
        self.subconfigs.get(field)
    }

    /// Schema this one extends, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Names of the schemas this one extends, outermost first.
    #[must_use]
    pub fn lineage(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = self.parent.as_deref();
        while let Some(schema) = current {
            names.push(schema.name());
            current = schema.parent.as_deref();
        }
        names.reverse();
        names
    }

    /// Returns `true` when `self` is `other` or extends it.
    ///
    /// Schemas are compared by identity, so two schemas declared separately
    /// under the same name are unrelated.
    #[must_use]
    pub fn is_a(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || self
                .parent
                .as_deref()
                .is_some_and(|parent| parent.is_a(other))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .field(
                "subconfigs",
                &self
                    .subconfigs
                    .iter()
                    .map(|(field, schema)| (field.as_str(), schema.name()))
                    .collect::<Vec<_>>(),
            )
            .field("lineage", &self.lineage())
            .finish()
    }
}

/// Builder declaring a [`Schema`].
///
/// `build` is the registration step: it computes the subconfig map once and
/// freezes the schema.
#[derive(Debug)]
#[must_use]
pub struct SchemaBuilder {
    name: String,
    parent: Option<Arc<Schema>>,
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            fields: Vec::new(),
        }
    }

    /// Inherit the fields and subconfig map of `parent`.
    ///
    /// Fields declared on this builder with the same name as a parent field
    /// replace it in place.
    pub fn extends(mut self, parent: &Arc<Schema>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    /// Declare a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a required scalar or collection field.
    pub fn opaque(self, name: impl Into<String>) -> Self {
        self.field(FieldDef::new(name, FieldType::Opaque))
    }

    /// Declare a required nested field of schema `nested`.
    pub fn nested(self, name: impl Into<String>, nested: &Arc<Schema>) -> Self {
        self.field(FieldDef::new(name, FieldType::record(nested)))
    }

    /// Declare an optional nested field of schema `nested`, defaulting to null.
    pub fn optional_nested(self, name: impl Into<String>, nested: &Arc<Schema>) -> Self {
        self.field(
            FieldDef::new(name, FieldType::optional(FieldType::record(nested)))
                .with_default(crate::Value::Null),
        )
    }

    /// Freeze the schema, registering its subconfigs.
    ///
    /// References by name cannot be resolved here and are skipped; use
    /// [`SchemaRegistry::register`] for those.
    #[must_use]
    pub fn build(self) -> Arc<Schema> {
        self.build_with(|_| None)
    }

    pub(crate) fn build_with<F>(self, lookup: F) -> Arc<Schema>
    where
        F: Fn(&str) -> Option<Arc<Schema>>,
    {
        let Self {
            name,
            parent,
            fields: own,
        } = self;
        let mut fields = parent
            .as_ref()
            .map_or_else(Vec::new, |schema| schema.fields.clone());
        for field in own {
            match fields.iter_mut().find(|existing| existing.name() == field.name()) {
                Some(existing) => *existing = field,
                None => fields.push(field),
            }
        }
        let subconfigs = subconfigs::resolve_subconfigs(
            parent.as_deref().map(Schema::subconfigs),
            &fields,
            &lookup,
        );
        Arc::new(Schema {
            name,
            fields,
            subconfigs,
            parent,
        })
    }
}
