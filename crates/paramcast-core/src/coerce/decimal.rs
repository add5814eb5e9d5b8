use crate::{
    error::CoercionReason,
    types::{DEFAULT_SCALE, Decimal, DecimalError},
    value::Value,
};

impl From<DecimalError> for CoercionReason {
    fn from(err: DecimalError) -> Self {
        match err {
            DecimalError::Syntax | DecimalError::ScaleExceeded => Self::FormatParse,
            DecimalError::PrecisionExceeded => Self::RangeOverflow,
        }
    }
}

pub(super) fn from_integer(input: &Value) -> Result<Value, CoercionReason> {
    let wide = input.as_i64().ok_or(CoercionReason::UnsupportedPair)?;

    Ok(Value::Decimal(Decimal::from_integer(wide)?))
}

pub(super) fn from_float(input: &Value) -> Result<Value, CoercionReason> {
    let Value::Float(value) = input else {
        return Err(CoercionReason::UnsupportedPair);
    };

    Ok(Value::Decimal(Decimal::from_float(*value)?))
}

/// Decimal text, trimmed. Grouping commas are not accepted here.
pub(super) fn parse(input: &Value) -> Result<Value, CoercionReason> {
    let text = input.as_text().ok_or(CoercionReason::UnsupportedPair)?;

    Ok(Value::Decimal(Decimal::parse_text(text.trim())?))
}

pub(super) fn rescale(input: &Value) -> Result<Value, CoercionReason> {
    let Value::Decimal(value) = input else {
        return Err(CoercionReason::UnsupportedPair);
    };

    Ok(Value::Decimal(value.rescale(DEFAULT_SCALE)?))
}
