use num_traits::Zero;

/// A value that is known to be greater than or equal to zero.
///
/// The invariant is checked once in [`NonNegative::new`] and holds for the
/// lifetime of the wrapper.
/// Works for primitive numbers as well as `uom` quantities such as `Mass`.
///
/// # Examples
///
/// ```
/// use gasbox_core::NonNegative;
///
/// let x = NonNegative::new(3.0).unwrap();
/// assert_eq!(x.into_inner(), 3.0);
///
/// assert!(NonNegative::new(-5.0).is_none());
/// assert!(NonNegative::new(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct NonNegative<T>(T);

impl<T> NonNegative<T>
where
    T: PartialOrd + Zero,
{
    /// Wraps `value` if it is non-negative.
    ///
    /// Returns `None` for negative values and for values that do not compare
    /// with zero at all, such as `NaN`.
    pub fn new(value: T) -> Option<Self> {
        if value >= T::zero() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Mass, mass::kilogram};

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_some(), "A positive value is ok");
        assert!(NonNegative::new(0.0).is_some(), "Zero is ok");
        assert!(NonNegative::new(-0.0).is_some(), "Negative zero is ok");
        assert!(NonNegative::new(-2.0).is_none(), "A negative value is not ok");
        assert!(NonNegative::new(f64::NAN).is_none(), "NaN is not ok");
    }

    #[test]
    fn masses() {
        let mass = NonNegative::new(Mass::new::<kilogram>(1000.0)).unwrap();
        assert_eq!(mass.into_inner().get::<kilogram>(), 1000.0);

        assert!(
            NonNegative::new(Mass::new::<kilogram>(0.0)).is_some(),
            "An empty container is ok",
        );
        assert!(
            NonNegative::new(Mass::new::<kilogram>(1000.0) + Mass::new::<kilogram>(-1500.0))
                .is_none(),
            "A negative mass is not ok",
        );
    }
}
