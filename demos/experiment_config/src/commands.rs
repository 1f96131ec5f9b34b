//! Implementations of the demo's subcommands.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use subconfig::{ConfigSchema, RawMapping, save_snapshot};
use tracing::info;

use crate::cli::{InheritArgs, SnapshotArgs};
use crate::config::ExperimentConfig;
use crate::error::Result;

/// Load `path` and write its flattened YAML to `out`.
///
/// # Errors
///
/// Returns a [`crate::error::DemoError`] when loading, rendering, or writing
/// fails.
pub fn show(path: &Utf8Path, out: &mut impl Write) -> Result<()> {
    let loaded = ExperimentConfig::from_yaml(path)?;
    let yaml = serde_yaml::to_string(&loaded.to_mapping()?)?;
    if let Some(source) = loaded.path() {
        writeln!(out, "# loaded from {source}")?;
    }
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

/// Derive a configuration from `args.parent`, save it, and return it.
///
/// # Errors
///
/// Returns a [`crate::error::DemoError`] when the parent cannot be loaded,
/// the overrides do not fit the schema, or saving fails.
pub fn inherit(args: &InheritArgs) -> Result<ExperimentConfig> {
    let parent = ExperimentConfig::from_yaml(&args.parent)?;
    let overrides: RawMapping = args
        .overrides
        .iter()
        .map(|entry| (entry.key.clone(), entry.value.clone()))
        .collect();
    let child = ExperimentConfig::inherit(&*parent, overrides)?;
    child.to_yaml(&args.out)?;
    info!(parent = %args.parent, out = %args.out, "derived configuration saved");
    Ok(child)
}

/// Save a timestamped copy of `args.path` and return the new file's path.
///
/// # Errors
///
/// Returns a [`crate::error::DemoError`] when loading or saving fails.
pub fn snapshot(args: &SnapshotArgs) -> Result<Utf8PathBuf> {
    let config = ExperimentConfig::from_yaml(&args.path)?;
    let time_id = args.time_id.clone().unwrap_or_else(default_time_id);
    let path = save_snapshot(&config.to_mapping()?, &args.dir, &time_id)?;
    info!(%path, "snapshot saved");
    Ok(path)
}

/// Local time formatted as `YYYYmmdd-HHMMSS`.
#[must_use]
pub fn default_time_id() -> String {
    chrono::Local::now().format("%Y%m%d-%H%M%S").to_string()
}
