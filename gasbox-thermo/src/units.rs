//! Physical constants used by the gas models.

use uom::si::{f64::MolarHeatCapacity, molar_heat_capacity::joule_per_kelvin_mole};

/// Universal gas constant `R`, in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Returns the universal gas constant `R` as a typed quantity.
#[must_use]
pub fn gas_constant() -> MolarHeatCapacity {
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(GAS_CONSTANT)
}
