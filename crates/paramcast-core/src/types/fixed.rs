use crate::value::Value;
use paramcast_primitives::ScalarKind;
use std::fmt::Display;

///
/// CONSTANTS
///
/// In-band NULL sentinels for the fixed-width numeric kinds. Each signed
/// width reserves its minimum representable value.
///

pub const NULL_TINYINT: i8 = i8::MIN;
pub const NULL_SMALLINT: i16 = i16::MIN;
pub const NULL_INTEGER: i32 = i32::MIN;
pub const NULL_BIGINT: i64 = i64::MIN;

/// Double NULL sentinel. Only ever compared through [`NULL_FLOAT_BITS`].
pub const NULL_FLOAT: f64 = -1.7e308;
pub const NULL_FLOAT_BITS: u64 = NULL_FLOAT.to_bits();

///
/// NullableFixedWidth
///
/// A fixed-width numeric whose NULL is one reserved in-band value.
/// Sentinel collision is therefore an explicit check, not an accident of
/// equality.
///

pub trait NullableFixedWidth: Copy + Display + Into<Value> {
    const KIND: ScalarKind;
    const NULL: Self;

    /// Returns true if this value is the width's NULL sentinel.
    fn is_null(self) -> bool;

    /// `None` for the sentinel, the plain value otherwise.
    fn get(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }
}

macro_rules! impl_nullable_int {
    ( $( $type:ty => $kind:ident, $null:ident ),* $(,)? ) => {
        $(
            impl NullableFixedWidth for $type {
                const KIND: ScalarKind = ScalarKind::$kind;
                const NULL: Self = $null;

                fn is_null(self) -> bool {
                    self == $null
                }
            }

            impl FixedWidthInt for $type {}
        )*
    };
}

impl_nullable_int! {
    i8  => TinyInt, NULL_TINYINT,
    i16 => SmallInt, NULL_SMALLINT,
    i32 => Integer, NULL_INTEGER,
    i64 => BigInt, NULL_BIGINT,
}

impl NullableFixedWidth for f64 {
    const KIND: ScalarKind = ScalarKind::Float;
    const NULL: Self = NULL_FLOAT;

    fn is_null(self) -> bool {
        self.to_bits() == NULL_FLOAT_BITS
    }
}

///
/// FixedWidthInt
///
/// Integer widths reachable by narrowing from a 64-bit value.
///

pub trait FixedWidthInt: NullableFixedWidth + TryFrom<i64> + Into<i64> {}

///
/// NarrowFault
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NarrowFault {
    /// Outside `[T::MIN, T::MAX]`.
    Range,
    /// Inside the range but equal to the destination NULL sentinel.
    SentinelCollision,
}

/// Narrow a 64-bit integer into `T`.
///
/// The range check is inclusive on both ends; a value that lands on the
/// destination sentinel is rejected rather than silently read as NULL.
pub fn narrow<T: FixedWidthInt>(value: i64) -> Result<T, NarrowFault> {
    let narrowed = T::try_from(value).map_err(|_| NarrowFault::Range)?;
    if narrowed.is_null() {
        return Err(NarrowFault::SentinelCollision);
    }

    Ok(narrowed)
}

///
/// TESTS
///
