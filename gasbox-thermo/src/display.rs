//! Human-readable number formatting.

use std::fmt;

/// Significant digits written by [`Significant`].
const PRECISION: usize = 6;

/// Displays a number with six significant digits, like C's `%g`.
///
/// Trailing zeros are trimmed, and very small or very large magnitudes switch
/// to scientific notation with a signed two-digit exponent.
///
/// ```
/// use gasbox_thermo::Significant;
///
/// assert_eq!(Significant(831.400_000_000_000_1).to_string(), "831.4");
/// assert_eq!(Significant(1.0 / 3.0).to_string(), "0.333333");
/// assert_eq!(Significant(1.0e6).to_string(), "1e+06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significant(pub f64);

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent after rounding decides between fixed and scientific notation.
        let scientific = format!("{value:.prec$e}", prec = PRECISION - 1);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_zeros(mantissa), exponent.abs())
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            f.write_str(trim_zeros(&format!("{value:.decimals$}")))
        }
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
