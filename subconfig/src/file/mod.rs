//! Reading and writing configuration mappings as YAML files.
//!
//! Both directions use `serde_yaml`. Loading keeps the key order of the
//! document and saving writes fields in declaration order, so a load and
//! save cycle leaves a file's layout alone.

mod loader;
mod persist;
mod writer;

pub use loader::{load_mapping, parse_mapping};
pub use writer::{save_mapping, save_snapshot, snapshot_path};
