//! Experiment configuration used by the demo.
//!
//! An experiment names its dataset and, optionally, the model to train.
//! Both are nested records: they are built from nested YAML mappings and
//! flattened back when saved.

use serde::{Deserialize, Serialize};
use subconfig::ConfigSchema;

/// Where training data comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
pub struct DataConfig {
    /// Dataset root directory.
    pub root: String,
    /// Samples per batch.
    #[config(default = 32)]
    pub batch_size: u32,
}

/// Model architecture settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
pub struct ModelConfig {
    /// Architecture name.
    pub name: String,
    /// Number of layers.
    pub layers: u32,
    /// Dropout probability.
    #[serde(default)]
    pub dropout: f64,
}

/// One experiment run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
pub struct ExperimentConfig {
    /// Identifier used in result paths.
    pub exp_id: String,
    /// Training data.
    #[config(nested)]
    pub data: DataConfig,
    /// Model, when the experiment trains one.
    #[config(nested)]
    pub model: Option<ModelConfig>,
}
