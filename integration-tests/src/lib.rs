//! Shared fixtures for the gasbox integration tests.

/// The default container written out as JSON.
pub const HYDROGEN_JSON: &str = r#"{ "volume": 1000.0, "mass": 1000.0, "molar_mass": 1.0 }"#;

/// The default container written out as YAML.
pub const HYDROGEN_YAML: &str = "
volume: 1000.0
mass: 1000.0
molar_mass: 1.0
";

/// The default container written out as TOML.
pub const HYDROGEN_TOML: &str = "
volume = 1000.0
mass = 1000.0
molar_mass = 1.0
";

/// A nitrogen bottle: 0.05 m³ holding 2.8 kg of N₂ (0.028 kg/mol).
pub const NITROGEN_TOML: &str = "
volume = 0.05
mass = 2.8
molar_mass = 0.028
";
