//! Subconfig registration: deciding which declared fields are nested
//! configuration records.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::trace;

use super::{FieldDef, FieldType, Schema, SchemaRef};

/// Field name to nested schema.
pub type SubconfigMap = IndexMap<String, Arc<Schema>>;

/// Returns the nested schema denoted by `ty`, if any.
///
/// A direct record reference resolves to its schema. Optional and union types
/// are searched in order and the first schema found wins. Named references
/// are passed to `lookup`; an unknown name behaves like a non-record type.
///
/// # Examples
///
/// ```rust
/// use subconfig::{FieldType, Schema, nested_schema};
///
/// let nested = Schema::builder("NestedConfig").opaque("value").build();
/// let ty = FieldType::union([FieldType::Opaque, FieldType::record(&nested)]);
/// let found = nested_schema(&ty, &|_| None);
/// assert_eq!(found.map(|s| s.name().to_owned()), Some("NestedConfig".to_owned()));
/// ```
pub fn nested_schema(
    ty: &FieldType,
    lookup: &dyn Fn(&str) -> Option<Arc<Schema>>,
) -> Option<Arc<Schema>> {
    match ty {
        FieldType::Opaque => None,
        FieldType::Record(SchemaRef::Resolved(schema)) => Some(Arc::clone(schema)),
        FieldType::Record(SchemaRef::Named(name)) => lookup(name),
        FieldType::Optional(inner) => nested_schema(inner, lookup),
        FieldType::Union(alternatives) => alternatives
            .iter()
            .find_map(|alternative| nested_schema(alternative, lookup)),
    }
}

/// Compute the subconfig map for `fields`.
///
/// The map starts as a copy of `inherited` and is overlaid with every field
/// whose type denotes a schema. Fields whose references cannot be resolved
/// are left out without error.
pub(super) fn resolve_subconfigs(
    inherited: Option<&SubconfigMap>,
    fields: &[FieldDef],
    lookup: &dyn Fn(&str) -> Option<Arc<Schema>>,
) -> SubconfigMap {
    let mut map = inherited.cloned().unwrap_or_default();
    for field in fields {
        if let Some(schema) = nested_schema(field.ty(), lookup) {
            trace!(field = field.name(), nested = schema.name(), "registered subconfig");
            map.insert(field.name().to_owned(), schema);
        }
    }
    map
}
