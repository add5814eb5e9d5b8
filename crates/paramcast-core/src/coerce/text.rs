use crate::{coerce::null::is_csv_null, error::CoercionReason, value::Value};

/// Hexadecimal text to bytes. Surrounding whitespace is ignored.
pub(super) fn hex_decode(input: &Value) -> Result<Value, CoercionReason> {
    let text = input.as_text().ok_or(CoercionReason::UnsupportedPair)?;
    if is_csv_null(text) {
        return Ok(Value::Null);
    }

    decode_hex_element(text.trim()).map(Value::Bytes)
}

/// UTF-8 bytes to text; decoded text spelling the CSV null token is NULL.
pub(super) fn utf8_decode(input: &Value) -> Result<Value, CoercionReason> {
    let Value::Bytes(bytes) = input else {
        return Err(CoercionReason::UnsupportedPair);
    };

    let text = decode_utf8_element(bytes)?;
    if is_csv_null(&text) {
        return Ok(Value::Null);
    }

    Ok(Value::Text(text))
}

/// Natural text form of a scalar.
pub(super) fn stringify(input: &Value) -> Value {
    Value::Text(input.to_string())
}

/// One array element of the text to bytes pair; no trimming.
pub(super) fn decode_hex_element(text: &str) -> Result<Vec<u8>, CoercionReason> {
    hex::decode(text).map_err(|_| CoercionReason::Encoding)
}

/// One array element of the bytes to text pair; invalid UTF-8 is an error,
/// never replaced.
pub(super) fn decode_utf8_element(bytes: &[u8]) -> Result<String, CoercionReason> {
    String::from_utf8(bytes.to_vec()).map_err(|_| CoercionReason::Encoding)
}
