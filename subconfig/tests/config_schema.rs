//! Behavioural tests for derived configuration structs: subconfig
//! registration, construction from mappings, flattening, and inheritance.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use subconfig::{ConfigError, ConfigSchema, RawMapping, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
struct NestedConfig {
    value: i64,
    name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
struct DeepNestedConfig {
    id: String,
    #[config(nested)]
    nested: NestedConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
struct OptionalConfig {
    required: String,
    #[config(nested)]
    optional_nested: Option<NestedConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
struct ComplexConfig {
    name: String,
    #[config(nested)]
    nested_config: NestedConfig,
    #[config(nested)]
    deep_nested: DeepNestedConfig,
    #[config(nested)]
    optional_config: Option<OptionalConfig>,
    value_list: Option<Vec<i64>>,
    value_dict: Option<BTreeMap<String, f64>>,
}

/// Optimiser section.
mod optimiser {
    use serde::{Deserialize, Serialize};
    use subconfig::ConfigSchema;

    /// Optimiser settings.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
    pub struct Settings {
        /// Learning rate.
        pub lr: f64,
    }
}

/// Logging section.
mod logging {
    use serde::{Deserialize, Serialize};
    use subconfig::ConfigSchema;

    /// Logging settings, sharing the optimiser's struct name.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
    pub struct Settings {
        /// Minimum level.
        pub level: String,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ConfigSchema)]
struct TrainerConfig {
    #[config(nested)]
    optimiser: optimiser::Settings,
}

fn mapping(json: serde_json::Value) -> Result<RawMapping> {
    Value::from(json).into_mapping().map_err(|err| anyhow!(err))
}

fn nested(value: i64, name: &str) -> NestedConfig {
    NestedConfig {
        value,
        name: name.to_owned(),
    }
}

#[fixture]
fn parent() -> ComplexConfig {
    ComplexConfig {
        name: "parent".into(),
        nested_config: nested(42, "nested"),
        deep_nested: DeepNestedConfig {
            id: "deep1".into(),
            nested: nested(99, "deep_nested"),
        },
        optional_config: None,
        value_list: None,
        value_dict: None,
    }
}

#[fixture]
fn complex_mapping() -> serde_json::Value {
    json!({
        "name": "complex",
        "nested_config": {"value": 42, "name": "nested"},
        "deep_nested": {
            "id": "deep1",
            "nested": {"value": 99, "name": "deep_nested"},
        },
    })
}

#[rstest]
#[case("nested_config", "NestedConfig")]
#[case("deep_nested", "DeepNestedConfig")]
#[case("optional_config", "OptionalConfig")]
fn complex_config_registers_subconfigs(#[case] field: &str, #[case] schema: &str) {
    let registered = ComplexConfig::schema();
    assert_eq!(
        registered.subconfig(field).map(|nested| nested.name()),
        Some(schema)
    );
}

#[rstest]
fn registration_covers_every_level() {
    assert_eq!(
        DeepNestedConfig::schema()
            .subconfig("nested")
            .map(|nested| nested.name()),
        Some("NestedConfig")
    );
    assert_eq!(
        OptionalConfig::schema()
            .subconfig("optional_nested")
            .map(|nested| nested.name()),
        Some("NestedConfig")
    );
    let complex = ComplexConfig::schema();
    assert!(complex.subconfig("value_list").is_none());
    assert!(complex.subconfig("value_dict").is_none());
}

#[rstest]
fn from_mapping_basic() -> Result<()> {
    let config = NestedConfig::from_mapping(mapping(json!({"value": 42, "name": "test"}))?)?;
    ensure!(config == nested(42, "test"));
    Ok(())
}

#[rstest]
fn from_mapping_nested(complex_mapping: serde_json::Value) -> Result<()> {
    let config = ComplexConfig::from_mapping(mapping(complex_mapping)?)?;
    ensure!(config.name == "complex");
    ensure!(config.nested_config == nested(42, "nested"));
    ensure!(config.deep_nested.id == "deep1");
    ensure!(config.deep_nested.nested == nested(99, "deep_nested"));
    Ok(())
}

#[rstest]
fn from_mapping_optional_fields(complex_mapping: serde_json::Value) -> Result<()> {
    let without = ComplexConfig::from_mapping(mapping(complex_mapping.clone())?)?;
    ensure!(without.optional_config.is_none());

    let mut raw = mapping(complex_mapping)?;
    raw.insert(
        "optional_config".into(),
        Value::from(json!({
            "required": "required_value",
            "optional_nested": {"value": 123, "name": "optional_nested"},
        })),
    );
    let with = ComplexConfig::from_mapping(raw)?;
    let optional = with
        .optional_config
        .ok_or_else(|| anyhow!("optional_config should be set"))?;
    ensure!(optional.required == "required_value");
    ensure!(optional.optional_nested == Some(nested(123, "optional_nested")));
    Ok(())
}

#[rstest]
fn from_mapping_ignores_extra_fields() -> Result<()> {
    let config = NestedConfig::from_mapping(mapping(json!({
        "value": 42,
        "name": "test",
        "extra_field": "should be ignored",
    }))?)?;
    ensure!(config == nested(42, "test"));
    ensure!(!config.to_mapping()?.contains_key("extra_field"));
    Ok(())
}

#[rstest]
fn from_mapping_rejects_null_required_subconfig(
    complex_mapping: serde_json::Value,
) -> Result<()> {
    let mut raw = mapping(complex_mapping)?;
    raw.insert("nested_config".into(), Value::Null);
    let err = ComplexConfig::from_mapping(raw).expect_err("nested_config is required");
    ensure!(
        matches!(&err, ConfigError::RequiredFieldNull { field, .. } if field == "nested_config"),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn from_mapping_rejects_scalar_subconfig(complex_mapping: serde_json::Value) -> Result<()> {
    let mut raw = mapping(complex_mapping)?;
    raw.insert("deep_nested".into(), Value::from("deep1"));
    let err = ComplexConfig::from_mapping(raw).expect_err("deep_nested must be a mapping");
    ensure!(
        matches!(&err, ConfigError::InvalidNestedType { field, found, .. } if field == "deep_nested" && found == "string"),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn from_mapping_accepts_prebuilt_instances(complex_mapping: serde_json::Value) -> Result<()> {
    let prebuilt = nested(7, "typed").to_record()?;
    let mut raw = mapping(complex_mapping)?;
    raw.insert("nested_config".into(), Value::Record(prebuilt));
    let config = ComplexConfig::from_mapping(raw)?;
    ensure!(config.nested_config == nested(7, "typed"));
    Ok(())
}

#[rstest]
fn to_mapping_basic() -> Result<()> {
    let flat = Value::Mapping(nested(42, "test").to_mapping()?).to_json();
    ensure!(flat == json!({"value": 42, "name": "test"}), "{flat}");
    Ok(())
}

#[rstest]
fn to_mapping_nested_keeps_nulls(parent: ComplexConfig) -> Result<()> {
    let flat = Value::Mapping(parent.to_mapping()?).to_json();
    ensure!(
        flat == json!({
            "name": "parent",
            "nested_config": {"value": 42, "name": "nested"},
            "deep_nested": {
                "id": "deep1",
                "nested": {"value": 99, "name": "deep_nested"},
            },
            "optional_config": null,
            "value_list": null,
            "value_dict": null,
        }),
        "{flat}"
    );
    Ok(())
}

#[rstest]
fn round_trip_preserves_structure() -> Result<()> {
    let original = json!({
        "name": "complex",
        "nested_config": {"value": 42, "name": "nested"},
        "deep_nested": {
            "id": "deep1",
            "nested": {"value": 99, "name": "deep_nested"},
        },
        "optional_config": {
            "required": "required_value",
            "optional_nested": {"value": 123, "name": "optional_nested"},
        },
        "value_list": [1, 2, 3],
        "value_dict": {"a": 1.0, "b": 2.0},
    });
    let config = ComplexConfig::from_mapping(mapping(original.clone())?)?;
    let result = Value::Mapping(config.to_mapping()?).to_json();
    ensure!(result == original, "{result} != {original}");
    ensure!(ComplexConfig::from_mapping(config.to_mapping()?)? == config);
    Ok(())
}

#[rstest]
fn inherit_applies_overrides(parent: ComplexConfig) -> Result<()> {
    let mut overrides = mapping(json!({"name": "child"}))?;
    overrides.insert(
        "nested_config".into(),
        Value::Record(nested(84, "child_nested").to_record()?),
    );
    let child = ComplexConfig::inherit(&parent, overrides)?;
    ensure!(child.name == "child");
    ensure!(child.nested_config == nested(84, "child_nested"));
    ensure!(child.deep_nested == parent.deep_nested);
    Ok(())
}

#[rstest]
fn inherit_with_null_clears_optional_subconfig(mut parent: ComplexConfig) -> Result<()> {
    parent.optional_config = Some(OptionalConfig {
        required: "parent_required".into(),
        optional_nested: Some(nested(100, "parent_optional")),
    });
    let child = ComplexConfig::inherit(
        &parent,
        mapping(json!({"name": "child", "optional_config": null}))?,
    )?;
    ensure!(child.name == "child");
    ensure!(child.optional_config.is_none());
    ensure!(child.nested_config == parent.nested_config);
    ensure!(child.deep_nested.id == "deep1");
    Ok(())
}

#[rstest]
fn inherit_with_null_required_subconfig_fails(parent: ComplexConfig) -> Result<()> {
    let err = ComplexConfig::inherit(&parent, mapping(json!({"nested_config": null}))?)
        .expect_err("nested_config is required");
    ensure!(
        matches!(err, ConfigError::RequiredFieldNull { .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn inherit_replaces_nested_subtree_wholesale(parent: ComplexConfig) -> Result<()> {
    let err = ComplexConfig::inherit(&parent, mapping(json!({"nested_config": {"value": 1}}))?)
        .expect_err("partial nested override drops required fields");
    ensure!(
        matches!(&err, ConfigError::MissingField { field, .. } if field == "name"),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn same_named_structs_do_not_stand_in_for_each_other() -> Result<()> {
    let logging = logging::Settings {
        level: "debug".into(),
    }
    .to_record()?;
    ensure!(logging.schema().name() == optimiser::Settings::schema().name());
    let mut raw = RawMapping::new();
    raw.insert("optimiser".into(), Value::Record(logging));
    let err = TrainerConfig::from_mapping(raw)
        .expect_err("logging settings are not optimiser settings");
    ensure!(
        matches!(&err, ConfigError::InvalidNestedType { field, .. } if field == "optimiser"),
        "unexpected error {err:?}"
    );

    let mut accepted = RawMapping::new();
    accepted.insert(
        "optimiser".into(),
        Value::Record(optimiser::Settings { lr: 0.1 }.to_record()?),
    );
    let trainer = TrainerConfig::from_mapping(accepted)?;
    ensure!(trainer.optimiser == optimiser::Settings { lr: 0.1 });
    Ok(())
}
