//! Error types produced while building, flattening, and persisting
//! configuration records.

mod conversions;
mod types;

pub use types::{ConfigError, ConfigResult};

#[cfg(test)]
mod tests;
