//! Serde attribute parsing helpers.
//!
//! The generated schema must list fields under the keys serde emits, and its
//! defaults must agree with the ones serde applies, so the derive reads the
//! relevant `#[serde(...)]` attributes alongside its own.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, ExprPath, Field, LitStr, Token};

/// Supported `#[serde(rename_all = "...")]` rules for struct fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SerdeRenameAll {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl SerdeRenameAll {
    fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported serde rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    fn apply(self, field_name: &str) -> String {
        match self {
            Self::Lower => field_name.to_ascii_lowercase(),
            Self::Upper => field_name.to_ascii_uppercase(),
            Self::Pascal => field_name.to_upper_camel_case(),
            Self::Camel => field_name.to_lower_camel_case(),
            Self::Snake => field_name.to_snake_case(),
            Self::ScreamingSnake => field_name.to_shouty_snake_case(),
            Self::Kebab => field_name.to_kebab_case(),
            Self::ScreamingKebab => field_name.to_shouty_kebab_case(),
        }
    }
}

/// How serde fills a field missing from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SerdeDefault {
    /// No `#[serde(default)]`.
    None,
    /// `#[serde(default)]`: the field type's `Default`.
    Trait,
    /// `#[serde(default = "path")]`: a function returning the field type.
    Path(ExprPath),
}

/// Visit every `#[serde(...)]` key, leaving unhandled keys consumed.
fn for_each_serde_key<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<bool>,
{
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !f(&meta)? {
                super::discard_unknown(&meta)?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

/// Parse `#[serde(rename_all = "...")]` from struct attributes.
///
/// The `rename_all(serialize = "...")` form is honoured for serialisation.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<SerdeRenameAll>> {
    let mut out = None;
    for_each_serde_key(attrs, |meta| {
        if !meta.path.is_ident("rename_all") {
            return Ok(false);
        }
        if meta.input.peek(Token![=]) {
            let value = meta.value()?.parse::<LitStr>()?;
            out = Some(SerdeRenameAll::parse(&value)?);
            return Ok(true);
        }
        meta.parse_nested_meta(|nested| {
            if nested.path.is_ident("serialize") {
                let value = nested.value()?.parse::<LitStr>()?;
                out = Some(SerdeRenameAll::parse(&value)?);
                return Ok(());
            }
            super::discard_unknown(&nested)
        })?;
        Ok(true)
    })?;
    Ok(out)
}

/// Parse `#[serde(rename = "...")]` (and `rename(serialize = "...")`) from field attributes.
pub(crate) fn serde_field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut out = None;
    for_each_serde_key(attrs, |meta| {
        if !meta.path.is_ident("rename") {
            return Ok(false);
        }
        if meta.input.peek(Token![=]) {
            let value = meta.value()?.parse::<LitStr>()?;
            out = Some(value.value());
            return Ok(true);
        }
        if meta.input.peek(syn::token::Paren) {
            meta.parse_nested_meta(|nested| parse_serde_rename_serialize(&nested, &mut out))?;
        }
        Ok(true)
    })?;
    Ok(out)
}

fn parse_serde_rename_serialize(
    nested: &ParseNestedMeta,
    rename: &mut Option<String>,
) -> syn::Result<()> {
    if !nested.path.is_ident("serialize") {
        super::discard_unknown(nested)?;
        return Ok(());
    }

    let value = nested.value()?.parse::<LitStr>()?;
    *rename = Some(value.value());
    Ok(())
}

/// Compute the key serde uses for `field` given an optional container-level rename rule.
pub(crate) fn serde_serialized_field_key(
    field: &Field,
    rename_all: Option<SerdeRenameAll>,
) -> syn::Result<String> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(
            field,
            "unnamed fields are not supported",
        ));
    };
    if let Some(rename) = serde_field_rename(&field.attrs)? {
        return Ok(rename);
    }
    let raw = ident.to_string();
    let field_name = raw.strip_prefix("r#").unwrap_or(&raw);
    Ok(rename_all.map_or_else(|| field_name.to_owned(), |rule| rule.apply(field_name)))
}

/// Parse `#[serde(default)]` or `#[serde(default = "path")]` from field attributes.
pub(crate) fn serde_default(attrs: &[Attribute]) -> syn::Result<SerdeDefault> {
    let mut out = SerdeDefault::None;
    for_each_serde_key(attrs, |meta| {
        if !meta.path.is_ident("default") {
            return Ok(false);
        }
        out = if meta.input.peek(Token![=]) {
            let lit = meta.value()?.parse::<LitStr>()?;
            SerdeDefault::Path(lit.parse()?)
        } else {
            SerdeDefault::Trait
        };
        Ok(true)
    })?;
    Ok(out)
}

/// Returns true if the field has `#[serde(skip)]`.
///
/// Skipped fields never appear in serialised output, so the schema leaves
/// them out as well.
pub(crate) fn serde_skip(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for_each_serde_key(attrs, |meta| {
        if meta.path.is_ident("skip") {
            skip = true;
            return Ok(true);
        }
        Ok(false)
    })?;
    Ok(skip)
}
