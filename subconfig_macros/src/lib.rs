//! Procedural macros for `subconfig`.
//!
//! `#[derive(ConfigSchema)]` turns a struct with named fields into a
//! `subconfig::ConfigSchema`, generating a schema that is built once on first
//! use. Field names follow serde's `rename` and `rename_all` rules so the
//! schema matches the struct's serialised form.
//!
//! Recognised attributes:
//!
//! - `#[config(nested)]` on a field whose type, or `Option` inner type, is
//!   itself a `ConfigSchema`;
//! - `#[config(default = expr)]` on a field to declare a default;
//! - `#[config(skip)]` on a field to leave it out of the schema;
//! - `#[config(name = "...")]` on the struct to override the schema name;
//! - `#[config(crate = "...")]` on the struct when `subconfig` is renamed.
//!
//! `#[serde(default)]`, `#[serde(default = "path")]` and `#[serde(skip)]` are
//! honoured as well.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `subconfig::ConfigSchema`.
#[proc_macro_derive(ConfigSchema, attributes(config))]
pub fn derive_config_schema(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
