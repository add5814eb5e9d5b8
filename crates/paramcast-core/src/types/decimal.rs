use bigdecimal::{BigDecimal as WrappedDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::Zero;
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Fractional digits carried by every decimal the engine produces.
pub const DEFAULT_SCALE: u32 = 12;

/// Maximum significant digits of an engine decimal's mantissa.
pub const MAX_PRECISION: u32 = 38;

///
/// DecimalError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum DecimalError {
    #[error("malformed decimal literal")]
    Syntax,

    #[error("more than 12 significant fractional digits")]
    ScaleExceeded,

    #[error("more than 38 significant digits")]
    PrecisionExceeded,
}

///
/// Decimal
///
/// Arbitrary-precision decimal with an explicit scale. Equality is
/// numeric; engine output is always at [`DEFAULT_SCALE`] with at most
/// [`MAX_PRECISION`] significant digits.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    /// Zero at the default scale.
    #[must_use]
    pub fn zero() -> Self {
        Self(WrappedDecimal::new(BigInt::zero(), i64::from(DEFAULT_SCALE)))
    }

    /// Construct a decimal from an unscaled mantissa and scale.
    #[must_use]
    pub fn new(mantissa: i128, scale: u32) -> Self {
        Self(WrappedDecimal::new(BigInt::from(mantissa), i64::from(scale)))
    }

    #[must_use]
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }

    /// Significant digits in the mantissa (zero counts as one digit).
    #[must_use]
    pub fn precision(&self) -> u64 {
        self.0.digits()
    }

    /// True when the value is at the default scale and within precision.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.scale() == i64::from(DEFAULT_SCALE) && self.precision() <= u64::from(MAX_PRECISION)
    }

    ///
    /// CONVERSION
    ///

    /// Widen an integer exactly to [`DEFAULT_SCALE`].
    pub fn from_integer(value: i64) -> Result<Self, DecimalError> {
        canonical(WrappedDecimal::from(value))
    }

    /// Format a float to [`DEFAULT_SCALE`] fractional digits and reparse.
    pub fn from_float(value: f64) -> Result<Self, DecimalError> {
        Self::parse_text(&format!("{value:.12}"))
    }

    /// Parse decimal text at [`DEFAULT_SCALE`].
    ///
    /// Accepts an optional sign, digits with an optional fraction, and an
    /// optional exponent. Trailing zeros past the default scale are
    /// dropped before the scale check; nothing is rounded.
    pub fn parse_text(text: &str) -> Result<Self, DecimalError> {
        // digit separators are accepted by the bigint parser, not here
        if text.contains('_') {
            return Err(DecimalError::Syntax);
        }

        let parsed = WrappedDecimal::from_str(text).map_err(|_| DecimalError::Syntax)?;

        canonical(parsed)
    }

    /// Move to `target` scale, rounding half away from zero when digits
    /// are dropped.
    pub fn rescale(&self, target: u32) -> Result<Self, DecimalError> {
        let out = Self(self.0.with_scale_round(i64::from(target), RoundingMode::HalfUp));
        if out.precision() > u64::from(MAX_PRECISION) {
            return Err(DecimalError::PrecisionExceeded);
        }

        Ok(out)
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

// Exact move to the default scale. Trailing zeros are dropped first so
// only significant fractional digits count against the scale, and the
// precision check runs before any padding is materialized.
fn canonical(value: WrappedDecimal) -> Result<Decimal, DecimalError> {
    if value.is_zero() {
        return Ok(Decimal::zero());
    }

    let value = value.normalized();
    let scale = value.as_bigint_and_exponent().1;
    let default_scale = i64::from(DEFAULT_SCALE);
    if scale > default_scale {
        return Err(DecimalError::ScaleExceeded);
    }

    let digits = i128::from(value.digits()) + i128::from(default_scale - scale);
    if digits > i128::from(MAX_PRECISION) {
        return Err(DecimalError::PrecisionExceeded);
    }

    Ok(Decimal(value.with_scale(default_scale)))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::parse_text(s).expect("decimal literal")
    }

    #[test]
    fn parse_pads_to_default_scale() {
        let cases = [
            ("1234.5", "1234.500000000000"),
            ("-0.25", "-0.250000000000"),
            ("+7", "7.000000000000"),
            (".5", "0.500000000000"),
            ("5.", "5.000000000000"),
            ("1.5e3", "1500.000000000000"),
            ("15E-2", "0.150000000000"),
            ("000", "0.000000000000"),
            ("0e-5000", "0.000000000000"),
            ("0.000000000001", "0.000000000001"),
        ];

        for (input, expected) in cases {
            let value = d(input);
            assert_eq!(value.scale(), 12, "scale mismatch for {input}");
            assert_eq!(value.to_string(), expected, "render mismatch for {input}");
        }
    }

    #[test]
    fn parse_strips_trailing_zeros_before_scale_check() {
        assert_eq!(d("1.2500000000000000000"), d("1.25"));
        assert_eq!(
            Decimal::parse_text("0.0000000000001"),
            Err(DecimalError::ScaleExceeded)
        );
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for s in ["", "-", ".", "1.2.3", "12a", "1e", "1e+", "--1", " 1", "1,000", "1_000"] {
            assert_eq!(Decimal::parse_text(s), Err(DecimalError::Syntax), "{s:?}");
        }
    }

    #[test]
    fn parse_enforces_precision() {
        // 26 integer digits + 12 fractional = 38
        let max = "9".repeat(26);
        assert_eq!(d(&max).precision(), u64::from(MAX_PRECISION));

        let over = "1".repeat(27);
        assert_eq!(
            Decimal::parse_text(&over),
            Err(DecimalError::PrecisionExceeded)
        );
        assert_eq!(
            Decimal::parse_text("1e400"),
            Err(DecimalError::PrecisionExceeded)
        );
    }

    #[test]
    fn integers_widen_exactly() {
        let max = Decimal::from_integer(i64::MAX).expect("fits");
        assert_eq!(max.to_string(), format!("{}.000000000000", i64::MAX));

        let min = Decimal::from_integer(i64::MIN).expect("fits");
        assert_eq!(min, Decimal::new(i128::from(i64::MIN) * 1_000_000_000_000, 12));
        assert!(min.is_canonical());
    }

    #[test]
    fn floats_go_through_twelve_digit_text() {
        assert_eq!(Decimal::from_float(0.1).expect("finite"), d("0.1"));
        assert_eq!(Decimal::from_float(-2.5).expect("finite"), d("-2.5"));
        assert_eq!(Decimal::from_float(f64::NAN), Err(DecimalError::Syntax));
        assert_eq!(
            Decimal::from_float(1e300),
            Err(DecimalError::PrecisionExceeded)
        );
    }

    #[test]
    fn rescale_rounds_half_away_from_zero() {
        let cases = [
            (Decimal::new(125, 14), "0.000000000001"),
            (Decimal::new(149, 14), "0.000000000001"),
            (Decimal::new(150, 14), "0.000000000002"),
            (Decimal::new(-150, 14), "-0.000000000002"),
            (Decimal::new(12, 1), "1.200000000000"),
            (Decimal::new(1, 60), "0.000000000000"),
        ];

        for (input, expected) in cases {
            let out = input.rescale(DEFAULT_SCALE).expect("rescale");
            assert_eq!(out.to_string(), expected, "rescale mismatch for {input:?}");
            assert!(out.is_canonical(), "scale mismatch for {input:?}");
        }

        assert_eq!(
            Decimal::new(i128::MAX, 0).rescale(DEFAULT_SCALE),
            Err(DecimalError::PrecisionExceeded)
        );
    }

    #[test]
    fn other_scales_are_not_canonical() {
        assert!(Decimal::zero().is_canonical());
        assert!(!Decimal::new(1, 2).is_canonical());
        assert!(!Decimal::new(0, 0).is_canonical());
    }
}
