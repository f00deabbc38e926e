use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Mass, MolarMass, Volume},
    mass::kilogram,
    molar_mass::kilogram_per_mole,
    volume::cubic_meter,
};

/// Initial contents of a gas container.
///
/// Each field is (de)serialized as a bare number in SI base units:
/// m³ for `volume`, kg for `mass`, and kg/mol for `molar_mass`.
/// Missing fields take their value from [`ContainerConfig::default`].
///
/// Values are not validated; see [`GasState`](crate::GasState).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub volume: Volume,
    pub mass: Mass,
    pub molar_mass: MolarMass,
}

/// A 1,000 m³ container holding 1,000 kg of a hydrogen-like gas (1 kg/mol).
impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            volume: Volume::new::<cubic_meter>(1000.0),
            mass: Mass::new::<kilogram>(1000.0),
            molar_mass: MolarMass::new::<kilogram_per_mole>(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass::gram, volume::liter};

    #[test]
    fn default_is_hydrogen_container() {
        let config = ContainerConfig::default();

        assert_relative_eq!(config.volume.get::<liter>(), 1_000_000.0);
        assert_relative_eq!(config.mass.get::<gram>(), 1_000_000.0);
        assert_relative_eq!(config.molar_mass.get::<kilogram_per_mole>(), 1.0);
    }
}
