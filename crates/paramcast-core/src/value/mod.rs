mod array;
mod tag;


use crate::types::{ContextHandle, Date, DateTime, Decimal, Instant, Table, Timestamp};
use derive_more::Display;
use std::fmt;

// re-exports
pub use array::ArrayValue;
pub use tag::ValueTag;

///
/// NullSigil
///
/// Domain null singletons. Each one means NULL for every destination
/// type, not just the one it is named after.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum NullSigil {
    #[display("NULL_TIMESTAMP")]
    Timestamp,

    #[display("NULL_STRING_OR_VARBINARY")]
    TextOrBytes,

    #[display("NULL_DECIMAL")]
    Decimal,
}

///
/// Value
///
/// Loosely typed input and exactly typed output of the engine.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// True absence.
    Null,
    Sigil(NullSigil),
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(Timestamp),
    DateTime(DateTime),
    Date(Date),
    Instant(Instant),
    Table(Table),
    Array(ArrayValue),
    Context(ContextHandle),
}

impl Value {
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::tag_of(self)
    }

    /// True for absence and the domain singletons. Fixed-width sentinels
    /// are ordinary numbers here; only the engine knows the destination.
    #[must_use]
    pub const fn is_null_sigil(&self) -> bool {
        matches!(self, Self::Null | Self::Sigil(_))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload widened to 64 bits, for any integer width.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::TinyInt(v) => Some(*v as i64),
            Self::SmallInt(v) => Some(*v as i64),
            Self::Integer(v) => Some(*v as i64),
            Self::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Sigil(sigil) => write!(f, "{sigil}"),
            Self::TinyInt(v) => write!(f, "{v}"),
            Self::SmallInt(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bytes(v) => f.write_str(&hex::encode(v)),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Instant(v) => write!(f, "{v}"),
            Self::Table(v) => write!(f, "{v}"),
            Self::Array(v) => write!(f, "{v}"),
            Self::Context(v) => write!(f, "context({})", v.type_name()),
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    NullSigil     => Sigil,
    i8            => TinyInt,
    i16           => SmallInt,
    i32           => Integer,
    i64           => BigInt,
    f64           => Float,
    Decimal       => Decimal,
    &str          => Text,
    String        => Text,
    Vec<u8>       => Bytes,
    &[u8]         => Bytes,
    Timestamp     => Timestamp,
    DateTime      => DateTime,
    Date          => Date,
    Instant       => Instant,
    Table         => Table,
    ArrayValue    => Array,
    ContextHandle => Context,
}
