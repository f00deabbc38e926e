//! Numeric invariants shared by the gasbox crates.

mod non_negative;

pub use non_negative::NonNegative;
