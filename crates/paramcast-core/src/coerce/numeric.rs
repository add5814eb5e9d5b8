//! Integer widening and narrowing, integer to double, and numeric text.

use crate::{
    coerce::null::{is_csv_null, null_for},
    error::{CoercionError, CoercionReason},
    param::ParamType,
    types::{FixedWidthInt, NULL_FLOAT_BITS, NarrowFault, NullableFixedWidth, narrow},
    value::Value,
};
use paramcast_primitives::ScalarKind;
use std::num::{IntErrorKind, ParseIntError};

const GROUPING_SEPARATOR: char = ',';

impl From<NarrowFault> for CoercionReason {
    fn from(fault: NarrowFault) -> Self {
        match fault {
            NarrowFault::Range => Self::RangeOverflow,
            NarrowFault::SentinelCollision => Self::SentinelCollision,
        }
    }
}

/// Move an integer of any width into `target`'s width.
pub(super) fn resize(input: &Value, target: ScalarKind) -> Result<Value, CoercionReason> {
    let wide = input.as_i64().ok_or(CoercionReason::UnsupportedPair)?;
    if is_source_sentinel(input) {
        return Ok(null_for(&ParamType::Scalar(target)));
    }

    match target {
        ScalarKind::TinyInt => narrowed::<i8>(wide),
        ScalarKind::SmallInt => narrowed::<i16>(wide),
        ScalarKind::Integer => narrowed::<i32>(wide),
        ScalarKind::BigInt => narrowed::<i64>(wide),
        _ => Err(CoercionReason::UnsupportedPair),
    }
}

#[expect(clippy::cast_precision_loss)]
pub(super) fn integer_to_float(input: &Value) -> Result<Value, CoercionReason> {
    let wide = input.as_i64().ok_or(CoercionReason::UnsupportedPair)?;
    if is_source_sentinel(input) {
        return Ok(null_for(&ParamType::FLOAT));
    }

    Ok(Value::Float(wide as f64))
}

/// Text to an integer width or double.
///
/// Leading and trailing whitespace and grouping commas are ignored.
/// Overflow of the destination width is a range error; a parsed value
/// equal to the destination sentinel is a collision.
pub(super) fn parse_number(input: &Value, target: ScalarKind) -> Result<Value, CoercionReason> {
    let text = input.as_text().ok_or(CoercionReason::UnsupportedPair)?;
    if is_csv_null(text) {
        return Ok(null_for(&ParamType::Scalar(target)));
    }

    let digits = text.trim().replace(GROUPING_SEPARATOR, "");

    match target {
        ScalarKind::TinyInt => parse_fixed::<i8>(&digits),
        ScalarKind::SmallInt => parse_fixed::<i16>(&digits),
        ScalarKind::Integer => parse_fixed::<i32>(&digits),
        ScalarKind::BigInt => parse_fixed::<i64>(&digits),
        ScalarKind::Float => {
            let value: f64 = digits.parse().map_err(|_| CoercionReason::FormatParse)?;
            if value.to_bits() == NULL_FLOAT_BITS {
                return Err(CoercionReason::SentinelCollision);
            }

            Ok(Value::Float(value))
        }
        _ => Err(CoercionReason::UnsupportedPair),
    }
}

/// Parse text as a 64-bit integer for partitioning.
///
/// Returns `Ok(None)` when `kind` is not an integer kind. The text is
/// taken as is: no trimming, no separator removal, no null handling.
pub fn parse_integer_text(text: &str, kind: ScalarKind) -> Result<Option<i64>, CoercionError> {
    if !kind.is_integer() {
        return Ok(None);
    }

    text.parse::<i64>().map(Some).map_err(|_| {
        CoercionError::new(
            CoercionReason::FormatParse,
            &Value::from(text),
            &ParamType::Scalar(kind),
        )
    })
}

fn narrowed<T: FixedWidthInt>(wide: i64) -> Result<Value, CoercionReason> {
    narrow::<T>(wide).map(Into::into).map_err(Into::into)
}

fn parse_fixed<T>(digits: &str) -> Result<Value, CoercionReason>
where
    T: FixedWidthInt + std::str::FromStr<Err = ParseIntError>,
{
    let value = digits.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoercionReason::RangeOverflow,
        _ => CoercionReason::FormatParse,
    })?;

    if value.is_null() {
        return Err(CoercionReason::SentinelCollision);
    }

    Ok(value.into())
}

fn is_source_sentinel(input: &Value) -> bool {
    match input {
        Value::TinyInt(v) => v.is_null(),
        Value::SmallInt(v) => v.is_null(),
        Value::Integer(v) => v.is_null(),
        Value::BigInt(v) => v.is_null(),
        _ => false,
    }
}
