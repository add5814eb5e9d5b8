use crate::{
    param::ParamType,
    types::ContextCapability,
    value::{Value, ValueTag},
};

/// Postcondition: `value` is exactly what `target` declares.
///
/// Fixed-width numerics must hold their own variant (NULL is the in-band
/// sentinel). Other scalars and arrays may also be [`Value::Null`]. A
/// decimal must be at the default scale. The context marker only asks the
/// capability.
pub(super) fn verify_value<C: ContextCapability>(
    value: &Value,
    target: &ParamType,
    context: &C,
) -> bool {
    match (target, value) {
        (ParamType::Context, Value::Null) => true,
        (ParamType::Context, Value::Context(handle)) => context.accepts(handle),
        (ParamType::Context, _) => false,

        (ParamType::Array(_), Value::Null) => true,
        (ParamType::Array(kind), Value::Array(array)) => array.element_kind() == *kind,
        (ParamType::Array(_), _) => false,

        (ParamType::Scalar(kind), Value::Null) => !kind.has_null_sentinel(),
        (ParamType::Scalar(_), Value::Decimal(decimal)) if !decimal.is_canonical() => false,
        (ParamType::Scalar(kind), value) => value.tag() == ValueTag::of_kind(*kind),
    }
}
