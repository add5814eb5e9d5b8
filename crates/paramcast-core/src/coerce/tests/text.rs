use super::{ok, reason};
use crate::{
    error::CoercionReason,
    param::ParamType,
    types::{Column, Table},
    value::Value,
};
use paramcast_primitives::ScalarKind;

#[test]
fn text_passes_through_untrimmed() {
    assert_eq!(ok(ParamType::TEXT, "  hello "), Value::from("  hello "));
    assert_eq!(ok(ParamType::TEXT, ""), Value::from(""));
}

#[test]
fn hex_text_decodes_to_bytes() {
    let cases: [(&str, &[u8]); 4] = [
        ("4142", b"AB"),
        (" ff00 ", &[0xff, 0x00]),
        ("DeadBeef", &[0xde, 0xad, 0xbe, 0xef]),
        ("", &[]),
    ];

    for (text, bytes) in cases {
        assert_eq!(ok(ParamType::BYTES, text), Value::from(bytes), "{text:?}");
    }
}

#[test]
fn bad_hex_is_an_encoding_error() {
    for text in ["zz", "414", "41 42"] {
        assert_eq!(reason(ParamType::BYTES, text), CoercionReason::Encoding, "{text:?}");
    }
}

#[test]
fn utf8_bytes_decode_to_text() {
    assert_eq!(ok(ParamType::TEXT, Value::from(b"hi".to_vec())), Value::from("hi"));
    assert_eq!(
        ok(ParamType::TEXT, Value::from("héllo".as_bytes())),
        Value::from("héllo")
    );
}

#[test]
fn invalid_utf8_is_an_encoding_error() {
    assert_eq!(
        reason(ParamType::TEXT, Value::from(vec![0xffu8, 0xfe])),
        CoercionReason::Encoding
    );
}

#[test]
fn decoded_csv_token_is_null() {
    assert_eq!(ok(ParamType::TEXT, Value::from(b"\\N".to_vec())), Value::Null);
    assert_eq!(ok(ParamType::TEXT, Value::from(b" \\N ".to_vec())), Value::Null);
}

#[test]
fn bytes_pass_through() {
    let bytes = Value::from(vec![0u8, 1, 2]);
    assert_eq!(ok(ParamType::BYTES, bytes.clone()), bytes);
}

#[test]
fn tables_stringify_for_text_and_pass_through_as_tables() {
    let table = Table::new(vec![Column::new("n", ScalarKind::Integer)]);
    assert_eq!(
        ok(ParamType::TEXT, Value::Table(table.clone())),
        Value::from("table(1 columns, 0 rows)")
    );
    assert_eq!(
        reason(ParamType::BIGINT, Value::Table(table.clone())),
        CoercionReason::UnsupportedPair
    );
    assert_eq!(ok(ParamType::TABLE, Value::Table(table.clone())), Value::Table(table));
    assert_eq!(reason(ParamType::TABLE, "t"), CoercionReason::UnsupportedPair);
}
