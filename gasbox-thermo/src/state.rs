use std::{fmt, str::FromStr};

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Mass, MolarMass, Pressure, ThermodynamicTemperature, Volume},
    mass::kilogram,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::{ParseStateError, units::gas_constant};

/// The contents of a rigid gas container.
///
/// Holds the container volume, the mass of gas inside it, and the molar mass
/// of that gas.
/// Pressure follows from the ideal gas law, `P = m·R·T / (M·V)`.
///
/// A `GasState` does not check its own values.
/// Keeping the mass non-negative is the job of whoever owns the state,
/// typically a [`ContainerAdapter`](crate::ContainerAdapter).
///
/// The numeric methods take and return plain numbers in SI base units
/// (m³, kg, kg/mol, K, Pa).
/// The typed methods work in `uom` quantities.
///
/// # Example
///
/// ```
/// use gasbox_thermo::GasState;
///
/// let state = GasState::new(1000.0, 1000.0, 1.0);
/// assert!((state.pressure(300) - 2494.2).abs() < 1e-9);
/// assert_eq!(state.to_string(), "1000 1000 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    volume: Volume,
    mass: Mass,
    molar_mass: MolarMass,
}

impl GasState {
    /// Creates a state from volume (m³), mass (kg), and molar mass (kg/mol).
    #[must_use]
    pub fn new(volume: f64, mass: f64, molar_mass: f64) -> Self {
        Self::from_quantities(
            Volume::new::<cubic_meter>(volume),
            Mass::new::<kilogram>(mass),
            MolarMass::new::<kilogram_per_mole>(molar_mass),
        )
    }

    /// Creates a state from typed quantities.
    #[must_use]
    pub fn from_quantities(volume: Volume, mass: Mass, molar_mass: MolarMass) -> Self {
        Self {
            volume,
            mass,
            molar_mass,
        }
    }

    /// Returns a new state holding `mass`, keeping volume and molar mass.
    #[must_use]
    pub fn with_mass(self, mass: Mass) -> Self {
        Self { mass, ..self }
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    /// Computes pressure in Pa at an absolute temperature in K.
    #[must_use]
    pub fn pressure(&self, temperature: i32) -> f64 {
        self.pressure_at(ThermodynamicTemperature::new::<kelvin>(f64::from(
            temperature,
        )))
        .get::<pascal>()
    }

    /// Computes pressure with `P = m·R·T / (M·V)`.
    #[must_use]
    pub fn pressure_at(&self, temperature: ThermodynamicTemperature) -> Pressure {
        self.mass * gas_constant() * temperature / (self.molar_mass * self.volume)
    }

    /// Returns the amount of gas in mol.
    #[must_use]
    pub fn amount_of_matter(&self) -> f64 {
        self.amount_of_substance().get::<mole>()
    }

    /// Computes the amount of gas with `n = m / M`.
    #[must_use]
    pub fn amount_of_substance(&self) -> AmountOfSubstance {
        self.mass / self.molar_mass
    }
}

/// Writes `volume mass molar_mass` separated by single spaces.
///
/// [`GasState::from_str`] reads the same format back.
impl fmt::Display for GasState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.volume.get::<cubic_meter>(),
            self.mass.get::<kilogram>(),
            self.molar_mass.get::<kilogram_per_mole>(),
        )
    }
}

impl FromStr for GasState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let mut next = |field: &'static str| -> Result<f64, ParseStateError> {
            let text = fields.next().ok_or(ParseStateError::MissingField(field))?;
            text.parse()
                .map_err(|source| ParseStateError::InvalidNumber { field, source })
        };

        let volume = next("volume")?;
        let mass = next("mass")?;
        let molar_mass = next("molar_mass")?;

        let rest: Vec<&str> = fields.collect();
        if !rest.is_empty() {
            return Err(ParseStateError::TrailingInput(rest.join(" ")));
        }

        Ok(Self::new(volume, mass, molar_mass))
    }
}
