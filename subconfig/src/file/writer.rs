//! Writing raw mappings to YAML files.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::{ConfigResult, FileResultExt, RawMapping};

/// Write `mapping` to `path` as YAML, creating parent directories first.
///
/// # Errors
///
/// Returns [`crate::ConfigError::File`] when the directories cannot be
/// created, the mapping cannot be serialised, or the file cannot be
/// written.
pub fn save_mapping(path: impl AsRef<Utf8Path>, mapping: &RawMapping) -> ConfigResult<()> {
    let file = path.as_ref();
    if let Some(parent) = file.parent().filter(|dir| !dir.as_str().is_empty()) {
        std::fs::create_dir_all(parent).for_file(parent)?;
    }
    let yaml = serde_yaml::to_string(mapping).for_file(file)?;
    debug!(path = %file, fields = mapping.len(), "writing configuration file");
    std::fs::write(file, yaml).for_file(file)
}

/// Location of the snapshot for `time_id` under `dir`.
///
/// # Examples
///
/// ```
/// use subconfig::snapshot_path;
/// assert_eq!(
///     snapshot_path("results/configs", "20240101-1200"),
///     "results/configs/exp_config_20240101-1200.yaml",
/// );
/// ```
#[must_use]
pub fn snapshot_path(dir: impl AsRef<Utf8Path>, time_id: &str) -> Utf8PathBuf {
    dir.as_ref().join(format!("exp_config_{time_id}.yaml"))
}

/// Save a timestamped copy of `mapping` under `dir` and return its path.
///
/// The file is named `exp_config_<time_id>.yaml`, so snapshots of
/// successive runs sit side by side.
///
/// # Errors
///
/// Fails like [`save_mapping`].
pub fn save_snapshot(
    mapping: &RawMapping,
    dir: impl AsRef<Utf8Path>,
    time_id: &str,
) -> ConfigResult<Utf8PathBuf> {
    let path = snapshot_path(dir, time_id);
    save_mapping(&path, mapping)?;
    Ok(path)
}
