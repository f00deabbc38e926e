//! Ideal gas containers for the gasbox workspace.
//!
//! A [`GasState`] holds the volume, mass, and molar mass of a gas and knows
//! how to compute its pressure with the ideal gas law.
//! Callers that need the narrower [`Container`] interface work through a
//! [`ContainerAdapter`], which owns exactly one `GasState`.

mod config;
mod container;
mod display;
mod error;
mod state;

pub mod units;

pub use config::ContainerConfig;
pub use container::{Container, ContainerAdapter};
pub use display::Significant;
pub use error::{ContainerError, ParseStateError};
pub use state::GasState;
