//! Nested configuration records with mapping and YAML round-trips.
//!
//! A [`Schema`] is an ordered table of fields. Fields whose declared type is
//! another schema, directly or inside an optional or union type, are
//! *subconfigs*: the schema records them once, when it is built, and every
//! operation consults that map.
//!
//! - [`Schema::from_mapping`] turns an untyped [`RawMapping`] into a
//!   [`Record`], dropping unknown keys and constructing subconfigs
//!   recursively.
//! - [`Record::to_mapping`] flattens a record back, so that
//!   `from_mapping(to_mapping(x)) == x`.
//! - [`Schema::inherit`] clones a record with shallow overrides.
//! - [`Schema::from_yaml`] and [`Record::to_yaml`] persist records.
//!
//! Rust structs join in through [`ConfigSchema`], usually derived:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use subconfig::ConfigSchema;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
//! struct ModelConfig {
//!     layers: u32,
//! }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
//! struct RunConfig {
//!     name: String,
//!     #[config(nested)]
//!     model: Option<ModelConfig>,
//! }
//!
//! let parent = RunConfig {
//!     name: "baseline".into(),
//!     model: Some(ModelConfig { layers: 4 }),
//! };
//! let overrides = subconfig::Value::from(serde_json::json!({"model": null})).into_mapping()?;
//! let child = RunConfig::inherit(&parent, overrides)?;
//! assert_eq!(child.name, "baseline");
//! assert!(child.model.is_none());
//! # Ok::<_, subconfig::ConfigError>(())
//! ```

extern crate self as subconfig;

pub use subconfig_macros::ConfigSchema;

mod error;
mod file;
mod record;
mod result_ext;
mod schema;
mod typed;
mod value;

pub use error::{ConfigError, ConfigResult};
pub use file::{load_mapping, parse_mapping, save_mapping, save_snapshot, snapshot_path};
pub use record::{Record, overlay};
pub use result_ext::{ConfigResultExt, FileResultExt};
pub use schema::{
    FieldDef, FieldDefault, FieldType, Schema, SchemaBuilder, SchemaRef, SchemaRegistry,
    SubconfigMap, nested_schema,
};
pub use typed::{ConfigSchema, Loaded};
pub use value::{RawMapping, Value, ValueDeserializer, ValueKind};
