use gasbox_core::NonNegative;
use tracing::debug;
use uom::si::{
    f64::{Mass, ThermodynamicTemperature},
    mass::kilogram,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::{ContainerConfig, ContainerError, GasState, Significant};

/// The interface callers use to work with a gas container.
///
/// Temperatures are absolute, in K.
/// Pressures are in Pa and masses in kg.
///
/// The trait is object safe, so callers may hold a `Box<dyn Container>`
/// without knowing which model sits behind it.
pub trait Container {
    /// Returns the pressure change when the temperature moves from
    /// `base_temperature` to `base_temperature + delta_temperature`.
    fn calculate_delta_pressure(&self, base_temperature: i32, delta_temperature: i32) -> f64;

    /// Adds `delta_mass` to the gas in the container.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfRange`] if the resulting mass would be
    /// negative or not a number. The container is left unchanged in that case.
    fn modify_mass(&mut self, delta_mass: f64) -> Result<(), ContainerError>;

    /// Returns a human-readable summary of the container contents.
    fn description(&self) -> String;
}

/// Exposes a [`GasState`] through the [`Container`] interface.
///
/// The adapter owns its state exclusively.
/// Mass changes replace the state wholesale with a freshly built one,
/// and only after the new mass has been checked.
///
/// # Example
///
/// ```
/// use gasbox_thermo::{Container, ContainerAdapter, GasState};
///
/// let mut container = ContainerAdapter::new(GasState::new(1000.0, 1000.0, 1.0));
///
/// assert!(container.modify_mass(-1500.0).is_err());
/// container.modify_mass(500.0).unwrap();
///
/// assert_eq!(container.description(), "Volume:1000   Mass:1500   Molar:1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerAdapter {
    state: GasState,
}

impl ContainerAdapter {
    /// Wraps `state`, taking ownership of it.
    #[must_use]
    pub fn new(state: GasState) -> Self {
        Self { state }
    }

    /// Returns the wrapped state.
    #[must_use]
    pub fn state(&self) -> &GasState {
        &self.state
    }

    /// Consumes the adapter and returns the wrapped state.
    #[must_use]
    pub fn into_state(self) -> GasState {
        self.state
    }

    fn pressure_at_kelvin(&self, temperature: f64) -> f64 {
        self.state
            .pressure_at(ThermodynamicTemperature::new::<kelvin>(temperature))
            .get::<pascal>()
    }
}

impl From<ContainerConfig> for ContainerAdapter {
    fn from(config: ContainerConfig) -> Self {
        Self::new(GasState::from_quantities(
            config.volume,
            config.mass,
            config.molar_mass,
        ))
    }
}

impl Container for ContainerAdapter {
    /// Computes `P(T₀ + ΔT) − P(T₀)`.
    ///
    /// The temperatures are summed as floating-point values, so extreme
    /// inputs cannot overflow.
    fn calculate_delta_pressure(&self, base_temperature: i32, delta_temperature: i32) -> f64 {
        let base = f64::from(base_temperature);
        let end = base + f64::from(delta_temperature);

        self.pressure_at_kelvin(end) - self.pressure_at_kelvin(base)
    }

    fn modify_mass(&mut self, delta_mass: f64) -> Result<(), ContainerError> {
        let mass = self.state.mass();
        let delta = Mass::new::<kilogram>(delta_mass);

        let Some(new_mass) = NonNegative::new(mass + delta) else {
            let error = ContainerError::OutOfRange {
                mass: mass.get::<kilogram>(),
                delta: delta_mass,
            };
            debug!(
                mass_kg = mass.get::<kilogram>(),
                delta_kg = delta_mass,
                "rejected mass change"
            );
            return Err(error);
        };

        let replacement = self.state.with_mass(new_mass.into_inner());
        debug!(
            old_mass_kg = mass.get::<kilogram>(),
            new_mass_kg = replacement.mass().get::<kilogram>(),
            "replaced container state"
        );
        self.state = replacement;

        Ok(())
    }

    /// Formats the contents as `Volume:<V>   Mass:<m>   Molar:<M>` in SI base units,
    /// each with six significant digits.
    fn description(&self) -> String {
        format!(
            "Volume:{}   Mass:{}   Molar:{}",
            Significant(self.state.volume().get::<cubic_meter>()),
            Significant(self.state.mass().get::<kilogram>()),
            Significant(self.state.molar_mass().get::<kilogram_per_mole>()),
        )
    }
}
