//! Command-line surface of the demo.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use subconfig::Value;

use crate::error::DemoError;

/// Load, derive, and snapshot experiment configurations.
#[derive(Debug, Parser)]
#[command(
    name = "experiment-config",
    bin_name = "experiment-config",
    about = "Inspect and derive nested experiment configurations",
    version
)]
pub struct CommandLine {
    /// Selected workflow to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Workflows offered by the demo.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the flattened configuration loaded from a YAML file.
    Show(ShowArgs),
    /// Derive a configuration from a parent file with overrides.
    Inherit(InheritArgs),
    /// Save a timestamped copy of a configuration.
    Snapshot(SnapshotArgs),
}

/// Arguments for `show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Configuration file to load.
    pub path: Utf8PathBuf,
}

/// Arguments for `inherit`.
#[derive(Debug, Args)]
pub struct InheritArgs {
    /// Parent configuration file.
    pub parent: Utf8PathBuf,
    /// Top-level override; the value is parsed as YAML. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<Override>,
    /// Where to write the derived configuration.
    #[arg(long)]
    pub out: Utf8PathBuf,
}

/// Arguments for `snapshot`.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Configuration file to copy.
    pub path: Utf8PathBuf,
    /// Identifier embedded in the file name; defaults to the local time.
    #[arg(long)]
    pub time_id: Option<String>,
    /// Directory receiving snapshots.
    #[arg(long, default_value = "results/configs")]
    pub dir: Utf8PathBuf,
}

/// A `key=value` override applied to the top level of a configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Override {
    /// Field name.
    pub key: String,
    /// Replacement value; mappings replace nested records wholesale.
    pub value: Value,
}

/// Parse `key=value`, reading `value` as YAML.
///
/// # Errors
///
/// Returns [`DemoError::MalformedOverride`] when there is no `=` or the key
/// is empty, and [`DemoError::OverrideValue`] when the value is not YAML.
///
/// # Examples
///
/// ```rust
/// use experiment_config::cli::parse_override;
/// use subconfig::Value;
///
/// let parsed = parse_override("model=~").expect("valid override");
/// assert_eq!(parsed.key, "model");
/// assert_eq!(parsed.value, Value::Null);
/// ```
pub fn parse_override(raw: &str) -> Result<Override, DemoError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(DemoError::MalformedOverride(raw.to_owned()));
    };
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(DemoError::MalformedOverride(raw.to_owned()));
    }
    let parsed = serde_yaml::from_str(value).map_err(|source| DemoError::OverrideValue {
        key: trimmed.to_owned(),
        source,
    })?;
    Ok(Override {
        key: trimmed.to_owned(),
        value: parsed,
    })
}
