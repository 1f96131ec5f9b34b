//! Runtime loading of YAML documents into raw mappings.

use camino::Utf8Path;
use tracing::debug;

use crate::{ConfigResult, FileResultExt, RawMapping, Value};

/// Load the YAML document at `path` as a raw mapping.
///
/// # Examples
///
/// ```rust,no_run
/// use subconfig::load_mapping;
///
/// # fn run() -> subconfig::ConfigResult<()> {
/// let raw = load_mapping("configs/exp.yaml")?;
/// assert!(raw.contains_key("exp_id"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`crate::ConfigError::File`] when the file cannot be read or its
/// contents are not a YAML mapping.
pub fn load_mapping(path: impl AsRef<Utf8Path>) -> ConfigResult<RawMapping> {
    let file = path.as_ref();
    debug!(path = %file, "loading configuration file");
    let data = std::fs::read_to_string(file).for_file(file)?;
    parse_mapping(file, &data)
}

/// Parse in-memory YAML `data` as a raw mapping, attributing failures to
/// `path`.
///
/// Keys keep the order they have in the document. An empty or null
/// document is an empty mapping.
///
/// # Errors
///
/// Returns [`crate::ConfigError::File`] when `data` is not valid YAML or its
/// root is not a mapping.
pub fn parse_mapping(path: &Utf8Path, data: &str) -> ConfigResult<RawMapping> {
    if data.trim().is_empty() {
        return Ok(RawMapping::new());
    }
    match serde_yaml::from_str(data).for_file(path)? {
        Value::Null => Ok(RawMapping::new()),
        value => value.into_mapping().for_file(path),
    }
}
