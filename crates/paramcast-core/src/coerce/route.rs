use crate::{error::CoercionReason, value::ValueTag};
use paramcast_primitives::{ScalarFamily, ScalarKind};

///
/// Route
///
/// How a scalar input of one runtime kind reaches one destination kind.
/// Produced by [`scalar_route`].
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    /// Already the destination representation.
    Identity,
    Convert(Conversion),
    Reject(CoercionReason),
}

///
/// Conversion
///
/// A value-producing step, carried out by the family modules. The text
/// and bytes decodings are shared with array elements.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Conversion {
    /// Integer to integer, checked against range and sentinel.
    ResizeInteger,
    IntegerToFloat,
    /// Trimmed, separator-free text to an integer width or double.
    ParseNumber,
    ParseDecimal,
    HexDecode,
    Utf8Decode,
    /// Natural text form of the input.
    Stringify,
    DecimalFromInteger,
    DecimalFromFloat,
    RescaleDecimal,
    /// Temporal to temporal through epoch milliseconds.
    BridgeTemporal,
    /// Integer read as epoch milliseconds.
    EpochInteger,
    /// Epoch-millisecond text, then calendar text.
    ParseTemporal,
}

impl Conversion {
    /// Every conversion, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::ResizeInteger,
        Self::IntegerToFloat,
        Self::ParseNumber,
        Self::ParseDecimal,
        Self::HexDecode,
        Self::Utf8Decode,
        Self::Stringify,
        Self::DecimalFromInteger,
        Self::DecimalFromFloat,
        Self::RescaleDecimal,
        Self::BridgeTemporal,
        Self::EpochInteger,
        Self::ParseTemporal,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ResizeInteger => "resize_integer",
            Self::IntegerToFloat => "integer_to_float",
            Self::ParseNumber => "parse_number",
            Self::ParseDecimal => "parse_decimal",
            Self::HexDecode => "hex_decode",
            Self::Utf8Decode => "utf8_decode",
            Self::Stringify => "stringify",
            Self::DecimalFromInteger => "decimal_from_integer",
            Self::DecimalFromFloat => "decimal_from_float",
            Self::RescaleDecimal => "rescale_decimal",
            Self::BridgeTemporal => "bridge_temporal",
            Self::EpochInteger => "epoch_integer",
            Self::ParseTemporal => "parse_temporal",
        }
    }
}

/// The scalar coercion matrix.
///
/// Total over every (input tag, destination kind) pair. Arms are ordered
/// from most to least specific; the first match wins. Adding a kind to
/// the registry makes this match non-exhaustive until the new pairs are
/// decided here.
#[must_use]
pub const fn scalar_route(input: ValueTag, target: ScalarKind) -> Route {
    use ScalarFamily as F;

    let target_family = target.family();

    match input {
        // null inputs are resolved before routing and have no matrix entry
        ValueTag::Null | ValueTag::Sigil => Route::Reject(CoercionReason::UnsupportedPair),
        ValueTag::Array => Route::Reject(CoercionReason::ArrayScalarMismatch),
        ValueTag::Context => Route::Reject(CoercionReason::UnsupportedPair),

        ValueTag::TinyInt | ValueTag::SmallInt | ValueTag::Integer | ValueTag::BigInt => {
            match target_family {
                F::Integer if is_same(input, target) => Route::Identity,
                F::Integer => Route::Convert(Conversion::ResizeInteger),
                F::Float => Route::Convert(Conversion::IntegerToFloat),
                F::Decimal => Route::Convert(Conversion::DecimalFromInteger),
                F::Temporal => Route::Convert(Conversion::EpochInteger),
                F::Textual => Route::Convert(Conversion::Stringify),
                F::Binary | F::Tabular => Route::Reject(CoercionReason::UnsupportedPair),
            }
        }

        ValueTag::Float => match target_family {
            F::Float => Route::Identity,
            F::Decimal => Route::Convert(Conversion::DecimalFromFloat),
            F::Textual => Route::Convert(Conversion::Stringify),
            // narrowing a double to an integer is never attempted
            F::Integer | F::Binary | F::Temporal | F::Tabular => {
                Route::Reject(CoercionReason::UnsupportedPair)
            }
        },

        ValueTag::Decimal => match target_family {
            F::Decimal => Route::Convert(Conversion::RescaleDecimal),
            F::Textual => Route::Convert(Conversion::Stringify),
            F::Integer | F::Float | F::Binary | F::Temporal | F::Tabular => {
                Route::Reject(CoercionReason::UnsupportedPair)
            }
        },

        ValueTag::Text => match target_family {
            F::Textual => Route::Identity,
            F::Integer | F::Float => Route::Convert(Conversion::ParseNumber),
            F::Decimal => Route::Convert(Conversion::ParseDecimal),
            F::Binary => Route::Convert(Conversion::HexDecode),
            F::Temporal => Route::Convert(Conversion::ParseTemporal),
            F::Tabular => Route::Reject(CoercionReason::UnsupportedPair),
        },

        ValueTag::Bytes => match target_family {
            F::Binary => Route::Identity,
            F::Textual => Route::Convert(Conversion::Utf8Decode),
            F::Integer | F::Float | F::Decimal | F::Temporal | F::Tabular => {
                Route::Reject(CoercionReason::UnsupportedPair)
            }
        },

        ValueTag::Timestamp | ValueTag::DateTime | ValueTag::Date | ValueTag::Instant => {
            match target_family {
                F::Temporal if is_same(input, target) => Route::Identity,
                F::Temporal => Route::Convert(Conversion::BridgeTemporal),
                F::Textual => Route::Convert(Conversion::Stringify),
                F::Integer | F::Float | F::Decimal | F::Binary | F::Tabular => {
                    Route::Reject(CoercionReason::UnsupportedPair)
                }
            }
        }

        ValueTag::Table => match target_family {
            F::Tabular => Route::Identity,
            F::Textual => Route::Convert(Conversion::Stringify),
            F::Integer | F::Float | F::Decimal | F::Binary | F::Temporal => {
                Route::Reject(CoercionReason::UnsupportedPair)
            }
        },
    }
}

const fn is_same(input: ValueTag, target: ScalarKind) -> bool {
    match input.scalar_kind() {
        Some(kind) => kind as u8 == target as u8,
        None => false,
    }
}
