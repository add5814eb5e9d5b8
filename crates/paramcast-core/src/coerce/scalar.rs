use crate::{
    coerce::{Conversion, decimal, numeric, temporal, text},
    config::CoercionConfig,
    error::CoercionReason,
    value::Value,
};
use paramcast_primitives::ScalarKind;

/// Carry out one scalar conversion.
pub(super) fn convert(
    conversion: Conversion,
    target: ScalarKind,
    input: &Value,
    config: &CoercionConfig,
) -> Result<Value, CoercionReason> {
    match conversion {
        Conversion::ResizeInteger => numeric::resize(input, target),
        Conversion::IntegerToFloat => numeric::integer_to_float(input),
        Conversion::ParseNumber => numeric::parse_number(input, target),
        Conversion::ParseDecimal => decimal::parse(input),
        Conversion::HexDecode => text::hex_decode(input),
        Conversion::Utf8Decode => text::utf8_decode(input),
        Conversion::Stringify => Ok(text::stringify(input)),
        Conversion::DecimalFromInteger => decimal::from_integer(input),
        Conversion::DecimalFromFloat => decimal::from_float(input),
        Conversion::RescaleDecimal => decimal::rescale(input),
        Conversion::BridgeTemporal => temporal::bridge(input, target),
        Conversion::EpochInteger => temporal::epoch_integer(input, target),
        Conversion::ParseTemporal => temporal::parse(input, target, config.calendar_formats()),
    }
}
