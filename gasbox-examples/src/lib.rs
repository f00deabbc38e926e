//! Example applications for the gasbox crates.
//!
//! The runnable examples live in this crate's `examples/` directory:
//!
//! ```sh
//! cargo run --example container_demo
//! ```
//!
//! The scenarios they print are built here so the output can be tested.

use gasbox_thermo::{Container, ContainerError, Significant};
use tracing::warn;

/// Runs the container walkthrough and returns the console lines it produces.
///
/// Heats and cools the container by 100 K around 300 K, tries to remove
/// 1,500 kg of gas, then adds 500 kg.
/// The rejected removal is reported in the output and does not stop the run.
///
/// # Errors
///
/// Returns an error if adding the 500 kg fails.
pub fn container_walkthrough(container: &mut dyn Container) -> Result<Vec<String>, ContainerError> {
    let mut lines = vec![
        format!(
            "Change in pressure with increasing temperature: {}",
            Significant(container.calculate_delta_pressure(300, 100))
        ),
        format!(
            "Change in pressure with decreasing temperature: {}",
            Significant(container.calculate_delta_pressure(300, -100))
        ),
        format!("Before mass changing:  {}", container.description()),
    ];

    if let Err(error) = container.modify_mass(-1500.0) {
        warn!(%error, "mass change failed, continuing");
        lines.push(format!("Trying to set mass negative - {error}"));
    }

    container.modify_mass(500.0)?;
    lines.push(format!("After mass changing:  {}", container.description()));

    Ok(lines)
}
