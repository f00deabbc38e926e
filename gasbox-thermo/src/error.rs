use std::num::ParseFloatError;

use thiserror::Error;

/// Errors returned by [`Container`](crate::Container) operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContainerError {
    /// The requested change would leave the container with negative mass.
    ///
    /// Also returned when the new mass does not compare with zero at all,
    /// as happens for a `NaN` delta.
    ///
    /// Carries the mass before the change and the rejected delta, both in kg.
    #[error("incorrect mass change: mass becomes negative ({mass} + {delta} < 0)")]
    OutOfRange { mass: f64, delta: f64 },
}

/// Errors that may occur when parsing a serialized [`GasState`](crate::GasState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStateError {
    /// The text ended before the named field.
    #[error("missing `{0}` field")]
    MissingField(&'static str),

    /// The named field is not a valid floating-point number.
    #[error("invalid `{field}` value: {source}")]
    InvalidNumber {
        field: &'static str,
        source: ParseFloatError,
    },

    /// The text continues after the last expected field.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}
