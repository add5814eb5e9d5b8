use crate::{
    CSV_NULL,
    param::ParamType,
    types::{NULL_BIGINT, NULL_FLOAT, NULL_INTEGER, NULL_SMALLINT, NULL_TINYINT, NullableFixedWidth},
    value::Value,
};
use paramcast_primitives::ScalarKind;

/// Canonical NULL for a destination type.
///
/// Fixed-width numerics get their in-band sentinel; every other
/// destination gets [`Value::Null`].
#[must_use]
pub const fn null_for(target: &ParamType) -> Value {
    match target {
        ParamType::Scalar(ScalarKind::TinyInt) => Value::TinyInt(NULL_TINYINT),
        ParamType::Scalar(ScalarKind::SmallInt) => Value::SmallInt(NULL_SMALLINT),
        ParamType::Scalar(ScalarKind::Integer) => Value::Integer(NULL_INTEGER),
        ParamType::Scalar(ScalarKind::BigInt) => Value::BigInt(NULL_BIGINT),
        ParamType::Scalar(ScalarKind::Float) => Value::Float(NULL_FLOAT),
        ParamType::Scalar(_) | ParamType::Array(_) | ParamType::Context => Value::Null,
    }
}

/// True when `input` means NULL whatever the destination.
///
/// Covers absence, the domain singletons, a fixed-width sentinel, and
/// text equal to the CSV null token after trimming.
#[must_use]
pub(super) fn is_null_input(input: &Value) -> bool {
    match input {
        Value::Null | Value::Sigil(_) => true,
        Value::TinyInt(v) => v.is_null(),
        Value::SmallInt(v) => v.is_null(),
        Value::Integer(v) => v.is_null(),
        Value::BigInt(v) => v.is_null(),
        Value::Float(v) => v.is_null(),
        Value::Text(text) => is_csv_null(text),
        _ => false,
    }
}

/// Trimmed comparison against the CSV null token.
#[must_use]
pub(super) fn is_csv_null(text: &str) -> bool {
    text.trim() == CSV_NULL
}
