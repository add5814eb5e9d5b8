use crate::{
    coerce::{
        Conversion,
        text::{decode_hex_element, decode_utf8_element},
    },
    error::CoercionReason,
    obs::CoercionEvent,
    value::ArrayValue,
};
use paramcast_primitives::ScalarKind;

/// Retype an array to `target` elements.
///
/// Same-kind arrays never get here; the engine passes them through. An
/// empty array of any kind becomes an empty array of `target`. Otherwise
/// only bytes to text (UTF-8) and text to bytes (hex) convert, element by
/// element, and one bad element fails the whole array.
pub(super) fn coerce_array(
    target: ScalarKind,
    input: &ArrayValue,
) -> Result<(CoercionEvent, ArrayValue), CoercionReason> {
    if input.is_empty() {
        return Ok((CoercionEvent::EmptyArrayRetyped, ArrayValue::empty(target)));
    }

    match (input, target) {
        (ArrayValue::Bytes(items), ScalarKind::Text) => {
            let texts = items
                .iter()
                .map(|bytes| decode_utf8_element(bytes))
                .collect::<Result<Vec<_>, _>>()?;

            Ok((converted(Conversion::Utf8Decode), ArrayValue::Text(texts)))
        }
        (ArrayValue::Text(items), ScalarKind::Bytes) => {
            let blobs = items
                .iter()
                .map(|text| decode_hex_element(text))
                .collect::<Result<Vec<_>, _>>()?;

            Ok((converted(Conversion::HexDecode), ArrayValue::Bytes(blobs)))
        }
        _ => Err(CoercionReason::ElementTypeMismatch),
    }
}

const fn converted(conversion: Conversion) -> CoercionEvent {
    CoercionEvent::Converted { conversion }
}
