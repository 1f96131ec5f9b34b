//! Input parsing for the `ConfigSchema` derive macro.
//!
//! This module gathers the struct identifier, fields, and relevant attribute
//! metadata in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields};

use super::{
    FieldAttrs, SerdeDefault, StructAttrs, parse_field_attrs, parse_struct_attrs, serde_default,
    serde_rename_all, serde_serialized_field_key, serde_skip,
};

/// A struct accepted by the derive.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub struct_attrs: StructAttrs,
    /// Declared fields in source order; skipped fields are not included.
    pub fields: Vec<ParsedField>,
}

impl ParsedInput {
    /// Schema name: the `name` override or the struct identifier.
    pub(crate) fn schema_name(&self) -> String {
        self.struct_attrs
            .name
            .clone()
            .unwrap_or_else(|| self.ident.to_string())
    }
}

/// One declared field.
pub(crate) struct ParsedField {
    /// Key serde uses for the field.
    pub key: String,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
    pub serde_default: SerdeDefault,
}

/// Gathers information from the user-provided struct.
///
/// Generic structs are rejected: every instantiation would need its own
/// schema, and the generated code caches a single one.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ConfigSchema cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "ConfigSchema requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "ConfigSchema can only be derived for structs",
            ));
        }
    };

    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let rename_all = serde_rename_all(&input.attrs)?;
    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let attrs = parse_field_attrs(field)?;
        if attrs.skip || serde_skip(&field.attrs)? {
            continue;
        }
        fields.push(ParsedField {
            key: serde_serialized_field_key(field, rename_all)?,
            ty: field.ty.clone(),
            serde_default: serde_default(&field.attrs)?,
            attrs,
        });
    }
    Ok(ParsedInput {
        ident,
        struct_attrs,
        fields,
    })
}
