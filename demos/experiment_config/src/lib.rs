//! Library facade for the `experiment_config` demo so integration tests can
//! reuse the configuration types and command implementations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
