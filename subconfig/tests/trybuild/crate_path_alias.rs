//! Trybuild fixture verifying `#[config(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use serde::{Deserialize, Serialize};
use subconfig as my_cfg;
use my_cfg::ConfigSchema;

#[derive(Debug, Serialize, Deserialize, ConfigSchema)]
#[config(crate = "my_cfg")]
struct AliasedConfig {
    value: String,
}

fn main() {
    let _: my_cfg::ConfigResult<my_cfg::RawMapping> = AliasedConfig {
        value: "hello".into(),
    }
    .to_mapping();
}
