//! Code generation for `#[derive(ConfigSchema)]`.
//!
//! The generated `schema()` declares one field per struct field and caches
//! the built schema in a function-local `OnceLock`, so registration runs once
//! per type.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{ParsedField, ParsedInput, SerdeDefault, option_inner};

/// Emit the `ConfigSchema` implementation for `parsed`.
pub(crate) fn config_schema_impl(parsed: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &parsed.ident;
    let name = parsed.schema_name();
    let fields = parsed.fields.iter().map(|field| field_def(field, krate));
    quote! {
        impl #krate::ConfigSchema for #ident {
            fn schema() -> ::std::sync::Arc<#krate::Schema> {
                static SCHEMA: ::std::sync::OnceLock<::std::sync::Arc<#krate::Schema>> =
                    ::std::sync::OnceLock::new();
                ::std::sync::Arc::clone(SCHEMA.get_or_init(|| {
                    #krate::Schema::builder(#name)
                        #( .field(#fields) )*
                        .build()
                }))
            }
        }
    }
}

/// `FieldDef` expression for one field, including its default.
fn field_def(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let key = &field.key;
    let ty_tokens = field_type(field, krate);
    let def = quote! { #krate::FieldDef::new(#key, #ty_tokens) };
    let ty = &field.ty;
    if let Some(expr) = &field.attrs.default {
        return quote! {
            #def.with_default_fn(|| {
                let __value: #ty = #expr;
                #krate::Value::from_serialize(&__value)
            })
        };
    }
    match &field.serde_default {
        SerdeDefault::Path(path) => quote! {
            #def.with_default_fn(|| {
                let __value: #ty = #path();
                #krate::Value::from_serialize(&__value)
            })
        },
        SerdeDefault::Trait => quote! {
            #def.with_default_fn(|| {
                #krate::Value::from_serialize(&<#ty as ::core::default::Default>::default())
            })
        },
        SerdeDefault::None if option_inner(ty).is_some() => quote! {
            #def.with_default(#krate::Value::Null)
        },
        SerdeDefault::None => def,
    }
}

/// `FieldType` expression: opaque, or a record reference for nested fields.
fn field_type(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    if !field.attrs.nested {
        return quote! { #krate::FieldType::Opaque };
    }
    let record = |ty: &syn::Type| {
        quote! {
            #krate::FieldType::record(&<#ty as #krate::ConfigSchema>::schema())
        }
    };
    match option_inner(&field.ty) {
        Some(inner) => {
            let inner_record = record(inner);
            quote! { #krate::FieldType::optional(#inner_record) }
        }
        None => record(&field.ty),
    }
}

#[cfg(test)]
mod tests {
    //! Tests for generated schema tokens.

    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use syn::{DeriveInput, parse_quote};

    fn expand(input: &DeriveInput) -> Result<String> {
        let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
        Ok(config_schema_impl(&parsed, &quote! { ::subconfig }).to_string())
    }

    #[rstest]
    fn nested_option_fields_are_optional_records() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Outer {
                #[config(nested)]
                extra: Option<Inner>,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains("FieldType :: optional (:: subconfig :: FieldType :: record"),
            "missing optional record: {tokens}"
        );
        ensure!(
            tokens.contains("with_default (:: subconfig :: Value :: Null)"),
            "missing null default: {tokens}"
        );
        Ok(())
    }

    #[rstest]
    fn plain_fields_are_opaque_and_required() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Plain {
                name: String,
            }
        };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("FieldType :: Opaque"), "{tokens}");
        ensure!(!tokens.contains("with_default"), "{tokens}");
        Ok(())
    }

    #[rstest]
    #[case(parse_quote! { struct S { #[serde(default)] n: u32 } }, "Default")]
    #[case(parse_quote! { struct S { #[serde(default = "seed")] n: u32 } }, "seed ()")]
    #[case(parse_quote! { struct S { #[config(default = 7)] n: u32 } }, "= 7")]
    fn defaults_become_factories(#[case] input: DeriveInput, #[case] needle: &str) -> Result<()> {
        let tokens = expand(&input)?;
        ensure!(tokens.contains("with_default_fn"), "{tokens}");
        ensure!(tokens.contains(needle), "missing {needle}: {tokens}");
        Ok(())
    }

    #[rstest]
    fn schema_name_override_is_used() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[config(name = "ExperimentConfig")]
            struct Exp {
                id: String,
            }
        };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("builder (\"ExperimentConfig\")"), "{tokens}");
        Ok(())
    }
}
