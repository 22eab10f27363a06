mod common;

use e6b::{AtmosphereConfig, AtmosphereConfigBuilder, ConfigError, E6bError, FlightComputer};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{create_tropical_computer, standard_atmosphere, tropical_yaml};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_yaml_file() {
    let file = write_config(tropical_yaml());
    let atmosphere = AtmosphereConfig::from_yaml_file(file.path()).unwrap();

    let computer = FlightComputer::new(atmosphere).unwrap();
    assert_eq!(computer, create_tropical_computer());
}

#[test]
fn test_empty_yaml_mapping_is_standard() {
    let file = write_config("{}\n");
    let atmosphere = AtmosphereConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(atmosphere, standard_atmosphere());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AtmosphereConfig::from_yaml_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_invalid_values_in_file() {
    let file = write_config("lapse_rate: -3.0\n");
    let result = AtmosphereConfig::from_yaml_file(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_yaml_and_json_agree() {
    let from_yaml = AtmosphereConfig::from_yaml_str(tropical_yaml()).unwrap();
    let from_json = AtmosphereConfigBuilder::from_json_str(
        r#"{ "isa_temp_at_sea_level": 25.0, "lapse_rate": 1.5 }"#,
    )
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_config_round_trips_through_yaml() {
    let atmosphere = *create_tropical_computer().atmosphere();
    let yaml = serde_yaml::to_string(&atmosphere).unwrap();
    assert_eq!(AtmosphereConfig::from_yaml_str(&yaml).unwrap(), atmosphere);
}

#[test]
fn test_config_error_converts_into_e6b_error() {
    fn load(path: &std::path::Path) -> e6b::Result<FlightComputer> {
        let atmosphere = AtmosphereConfig::from_yaml_file(path)?;
        FlightComputer::new(atmosphere)
    }

    let file = write_config("isa_temp_at_sea_level: [oops]\n");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, E6bError::Config(ConfigError::YamlError(_))));
    assert!(err.to_string().starts_with("Config error: Failed to parse YAML"));
}
