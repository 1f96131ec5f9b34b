//! Parsing utilities for the `ConfigSchema` derive macro.

use syn::parenthesized;
use syn::{Attribute, Expr, Token};

mod input;
mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
use literals::lit_str;
pub(crate) use serde_attrs::SerdeDefault;
use serde_attrs::{serde_default, serde_rename_all, serde_serialized_field_key, serde_skip};
pub(crate) use type_utils::option_inner;

/// Struct-level `#[config(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Schema name; defaults to the struct identifier.
    pub name: Option<String>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[config(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `::subconfig::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(ConfigSchema)]`.
///
/// - `nested` registers the field as a subconfig.
/// - `default` supplies a default expression of the field's type.
/// - `skip` leaves the field out of the schema.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub nested: bool,
    pub default: Option<Expr>,
    pub skip: bool,
}

/// Iterate all `#[config(...)]` attributes once and apply a callback.
fn parse_config<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Rejects an unrecognised `#[config(...)]` key.
///
/// Unlike serde attributes, which are shared with serde's own derive, every
/// `config` key belongs to this macro, so a typo is reported rather than
/// ignored.
fn unknown_key(meta: &syn::meta::ParseNestedMeta, position: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "?".to_owned(), ToString::to_string);
    meta.error(format!("unknown {position} attribute `config({key})`"))
}

/// Extracts `#[config(...)]` metadata applied to a struct.
///
/// Recognised keys are `name` and `crate`.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_config(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("name") => {
                out.name = Some(lit_str(meta, "name")?.value());
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(unknown_key(meta, "struct")),
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[config(...)]` attributes.
///
/// Recognised keys are `nested`, `default = expr` and `skip`.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_config(&field.attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("nested") => {
                out.nested = true;
                Ok(())
            }
            Some("skip") => {
                out.skip = true;
                Ok(())
            }
            Some("default") => {
                out.default = Some(meta.value()?.parse()?);
                Ok(())
            }
            _ => Err(unknown_key(meta, "field")),
        }
    })?;
    Ok(out)
}
