//! Unit tests for raw values and their conversions.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Value, ValueKind};
use crate::{ConfigError, Record, Schema};

#[rstest]
#[case(json!(null), ValueKind::Null)]
#[case(json!(true), ValueKind::Bool)]
#[case(json!(3), ValueKind::Integer)]
#[case(json!(u64::MAX), ValueKind::Unsigned)]
#[case(json!(2.5), ValueKind::Float)]
#[case(json!("s"), ValueKind::String)]
#[case(json!([1]), ValueKind::Sequence)]
#[case(json!({"a": 1}), ValueKind::Mapping)]
fn json_values_map_to_kinds(#[case] json: serde_json::Value, #[case] kind: ValueKind) {
    assert_eq!(Value::from(json).kind(), kind);
}

#[rstest]
fn mapping_keeps_insertion_order() -> Result<()> {
    let map = Value::from(json!({"zeta": 1, "alpha": 2, "mid": 3})).into_mapping()?;
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    ensure!(keys == ["zeta", "alpha", "mid"], "unexpected order {keys:?}");
    Ok(())
}

#[rstest]
fn into_mapping_rejects_scalars() -> Result<()> {
    let err = Value::from("text").into_mapping().expect_err("strings are not mappings");
    ensure!(
        matches!(err, ConfigError::NotAMapping { found: ValueKind::String }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn records_flatten_when_converted() -> Result<()> {
    let schema = Schema::builder("Point").opaque("x").opaque("y").build();
    let record = Record::new(
        &schema,
        Value::from(json!({"y": 2, "x": 1})).into_mapping()?,
    )?;
    let value = Value::from(record);
    ensure!(value.describe() == "record 'Point'");
    ensure!(value.to_json() == json!({"x": 1, "y": 2}));
    ensure!(serde_json::to_value(&value)? == json!({"x": 1, "y": 2}));
    ensure!(value.into_mapping()?.keys().map(String::as_str).eq(["x", "y"]));
    Ok(())
}

#[rstest]
fn non_finite_floats_become_null_in_json() {
    assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
}

#[rstest]
fn options_convert_to_null_or_value() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[rstest]
fn deserialises_from_yaml() -> Result<()> {
    let value: Value = serde_yaml::from_str("a: [1, ~]\nb: {c: x}\n")?;
    ensure!(value.to_json() == json!({"a": [1, null], "b": {"c": "x"}}));
    Ok(())
}

#[rstest]
fn integers_above_i64_stay_integral() -> Result<()> {
    let value: Value = serde_yaml::from_str("n: 18446744073709551615\nm: 7\n")?;
    let map = value.into_mapping()?;
    ensure!(map.get("n") == Some(&Value::Unsigned(u64::MAX)));
    ensure!(map.get("m") == Some(&Value::Integer(7)));
    ensure!(Value::from(7_u64) == Value::Integer(7));
    Ok(())
}

#[rstest]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn non_finite_floats_survive_serde(#[case] float: f64) -> Result<()> {
    let value = Value::from_serialize(&float)?;
    ensure!(value == Value::Float(float));
    let text = serde_yaml::to_string(&value)?;
    ensure!(serde_yaml::from_str::<Value>(&text)? == value, "{text}");
    ensure!(value.deserialize_into::<f64>()? == float);
    Ok(())
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Schedule {
    Constant,
    Step { every: u32, factor: f64 },
}

#[rstest]
#[case(Schedule::Constant)]
#[case(Schedule::Step { every: 10, factor: 0.5 })]
fn enums_round_trip_through_the_tree(#[case] schedule: Schedule) -> Result<()> {
    let value = Value::from_serialize(&schedule)?;
    ensure!(value.clone().deserialize_into::<Schedule>()? == schedule, "{value:?}");
    Ok(())
}

#[rstest]
fn typed_reads_see_through_records() -> Result<()> {
    #[derive(Debug, PartialEq, Deserialize)]
    struct Point {
        x: i64,
        y: Option<u64>,
    }
    let schema = Schema::builder("Point").opaque("x").opaque("y").build();
    let record = Record::new(
        &schema,
        Value::from(json!({"x": -1, "y": null})).into_mapping()?,
    )?;
    let point: Point = Value::Record(record).deserialize_into()?;
    ensure!(point == Point { x: -1, y: None });
    Ok(())
}
