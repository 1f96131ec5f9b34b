//! Unit tests for error construction and display.

use camino::Utf8Path;
use rstest::rstest;

use super::ConfigError;
use crate::{ConfigResultExt, FileResultExt, ValueKind};

#[rstest]
fn required_null_names_schema_and_field() {
    let err = ConfigError::RequiredFieldNull {
        schema: "OuterConfig".into(),
        field: "nested_config".into(),
    };
    assert_eq!(
        err.to_string(),
        "required subconfig 'nested_config' of 'OuterConfig' cannot be null"
    );
    assert_eq!(err.field(), Some("nested_config"));
}

#[rstest]
fn invalid_nested_type_describes_received_value() {
    let err = ConfigError::InvalidNestedType {
        schema: "OuterConfig".into(),
        field: "nested_config".into(),
        expected: "NestedConfig".into(),
        found: "integer".into(),
    };
    let message = err.to_string();
    assert!(message.contains("NestedConfig"), "{message}");
    assert!(message.contains("found integer"), "{message}");
}

#[rstest]
#[case(ConfigError::NotAMapping { found: ValueKind::Sequence })]
#[case(ConfigError::file("exp.yaml", "boom"))]
fn non_field_errors_have_no_field(#[case] err: ConfigError) {
    assert!(err.field().is_none());
}

#[rstest]
fn file_errors_keep_their_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = Err::<(), _>(io)
        .for_file(Utf8Path::new("configs/exp.yaml"))
        .expect_err("error should propagate");
    assert!(err.to_string().contains("configs/exp.yaml"));
    assert!(std::error::Error::source(&err).is_some());
}

#[rstest]
fn serde_errors_convert_into_config_errors() {
    let yaml = serde_yaml::from_str::<u8>("[")
        .into_config()
        .expect_err("malformed YAML should fail");
    assert!(matches!(yaml, ConfigError::Yaml(_)));
    let typed = Err::<(), _>(<serde::de::value::Error as serde::de::Error>::custom("bad field"))
        .into_config()
        .expect_err("error should propagate");
    assert!(matches!(&typed, ConfigError::Deserialize(_)));
    assert_eq!(typed.to_string(), "bad field");
    assert!(typed.field().is_none());
}
