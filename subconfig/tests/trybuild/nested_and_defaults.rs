use serde::{Deserialize, Serialize};
use subconfig::{ConfigResult, ConfigSchema, RawMapping};

#[derive(Debug, Serialize, Deserialize, ConfigSchema)]
#[serde(rename_all = "kebab-case")]
struct ModelConfig {
    hidden_size: u32,
    #[serde(default)]
    dropout: f64,
}

#[derive(Debug, Serialize, Deserialize, ConfigSchema)]
#[config(name = "Experiment")]
struct ExperimentConfig {
    exp_id: String,
    #[config(nested)]
    model: ModelConfig,
    #[config(nested)]
    baseline: Option<ModelConfig>,
    #[config(default = vec![1, 2])]
    seeds: Vec<u64>,
    #[serde(skip)]
    #[config(skip)]
    scratch: Option<String>,
}

fn main() {
    let _: ConfigResult<ExperimentConfig> = ExperimentConfig::from_mapping(RawMapping::new());
    assert_eq!(ExperimentConfig::schema().name(), "Experiment");
}
