use approx::assert_relative_eq;
use gasbox_thermo::{Container, ContainerAdapter, ContainerConfig};
use integration_tests::{HYDROGEN_JSON, HYDROGEN_TOML, HYDROGEN_YAML, NITROGEN_TOML};
use serde::Deserialize;
use uom::si::{f64::Mass, mass::kilogram, volume::cubic_meter};

/// A scenario file that nests the container under its own table.
#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    container: ContainerConfig,
}

#[test]
fn every_format_describes_the_same_container() {
    let from_json: ContainerConfig = serde_json::from_str(HYDROGEN_JSON).unwrap();
    let from_yaml: ContainerConfig = serde_yaml::from_str(HYDROGEN_YAML).unwrap();
    let from_toml: ContainerConfig = toml::from_str(HYDROGEN_TOML).unwrap();

    assert_eq!(from_json, ContainerConfig::default());
    assert_eq!(from_yaml, ContainerConfig::default());
    assert_eq!(from_toml, ContainerConfig::default());
}

#[test]
fn empty_document_is_the_default_container() {
    let from_json: ContainerConfig = serde_json::from_str("{}").unwrap();
    let from_toml: ContainerConfig = toml::from_str("").unwrap();

    assert_eq!(from_json, ContainerConfig::default());
    assert_eq!(from_toml, ContainerConfig::default());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ContainerConfig = toml::from_str("mass = 250.0").unwrap();

    assert_eq!(config.mass, Mass::new::<kilogram>(250.0));
    assert_eq!(config.volume, ContainerConfig::default().volume);
    assert_eq!(config.molar_mass, ContainerConfig::default().molar_mass);
}

#[test]
fn nested_scenario() {
    let scenario: Scenario = toml::from_str(&format!(
        "name = \"nitrogen bottle\"\n\n[container]\n{NITROGEN_TOML}"
    ))
    .unwrap();

    assert_eq!(scenario.name, "nitrogen bottle");
    assert_relative_eq!(scenario.container.volume.get::<cubic_meter>(), 0.05);
}

#[test]
fn nitrogen_bottle_pressure() {
    let config: ContainerConfig = toml::from_str(NITROGEN_TOML).unwrap();
    let container = ContainerAdapter::from(config);

    // P = m·R·T / (M·V) = 2.8 * 8.314 * 300 / (0.028 * 0.05) = 4,988,400 Pa
    assert_relative_eq!(
        container.state().pressure(300),
        4_988_400.0,
        max_relative = 1e-12
    );
    assert_eq!(container.description(), "Volume:0.05   Mass:2.8   Molar:0.028");
}

#[test]
fn json_round_trip() {
    let config: ContainerConfig = toml::from_str(NITROGEN_TOML).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: ContainerConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn malformed_values_are_rejected() {
    assert!(toml::from_str::<ContainerConfig>("mass = \"heavy\"").is_err());
    assert!(serde_json::from_str::<ContainerConfig>(r#"{ "volume": [1, 2] }"#).is_err());
}
