//! Caller-held catalogue of schemas for by-name references.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{Schema, SchemaBuilder};

/// Schemas registered so far, keyed by name.
///
/// The registry only matters for [`crate::FieldType::named`] references:
/// registering a schema resolves such references against the schemas already
/// present. A reference to a schema registered later stays unresolved and
/// the field is treated as opaque.
///
/// # Examples
///
/// ```rust
/// use subconfig::{FieldDef, FieldType, Schema, SchemaRegistry};
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(Schema::builder("DataConfig").opaque("root"));
/// let experiment = registry.register(
///     Schema::builder("ExperimentConfig")
///         .field(FieldDef::new("data", FieldType::named("DataConfig"))),
/// );
/// assert!(experiment.subconfig("data").is_some());
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build `builder`, resolving named references, and record the result.
    ///
    /// A schema registered under an existing name replaces the earlier one
    /// for future lookups; schemas already built keep their references.
    pub fn register(&mut self, builder: SchemaBuilder) -> Arc<Schema> {
        let schema = builder.build_with(|name| self.schemas.get(name).cloned());
        self.schemas
            .insert(schema.name().to_owned(), Arc::clone(&schema));
        schema
    }

    /// Add an already-built schema.
    pub fn insert(&mut self, schema: &Arc<Schema>) {
        self.schemas
            .insert(schema.name().to_owned(), Arc::clone(schema));
    }

    /// Look up a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Schema>> {
        self.schemas.get(name)
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
