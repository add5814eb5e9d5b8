use crate::types::{Date, DateTime, Decimal, Instant, Table, Timestamp};
use derive_more::From;
use paramcast_primitives::ScalarKind;
use std::fmt::{self, Display};

///
/// ArrayValue
///
/// Homogeneous array. The element kind is carried by the variant, so an
/// empty array still knows what it holds.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum ArrayValue {
    TinyInt(Vec<i8>),
    SmallInt(Vec<i16>),
    Integer(Vec<i32>),
    BigInt(Vec<i64>),
    Float(Vec<f64>),
    Decimal(Vec<Decimal>),
    Text(Vec<String>),
    Bytes(Vec<Vec<u8>>),
    Timestamp(Vec<Timestamp>),
    DateTime(Vec<DateTime>),
    Date(Vec<Date>),
    Instant(Vec<Instant>),
    Table(Vec<Table>),
}

macro_rules! for_each_array {
    ($array:expr, $items:ident => $body:expr) => {
        match $array {
            ArrayValue::TinyInt($items) => $body,
            ArrayValue::SmallInt($items) => $body,
            ArrayValue::Integer($items) => $body,
            ArrayValue::BigInt($items) => $body,
            ArrayValue::Float($items) => $body,
            ArrayValue::Decimal($items) => $body,
            ArrayValue::Text($items) => $body,
            ArrayValue::Bytes($items) => $body,
            ArrayValue::Timestamp($items) => $body,
            ArrayValue::DateTime($items) => $body,
            ArrayValue::Date($items) => $body,
            ArrayValue::Instant($items) => $body,
            ArrayValue::Table($items) => $body,
        }
    };
}

impl ArrayValue {
    /// Empty array of the given element kind.
    #[must_use]
    pub const fn empty(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::TinyInt => Self::TinyInt(Vec::new()),
            ScalarKind::SmallInt => Self::SmallInt(Vec::new()),
            ScalarKind::Integer => Self::Integer(Vec::new()),
            ScalarKind::BigInt => Self::BigInt(Vec::new()),
            ScalarKind::Float => Self::Float(Vec::new()),
            ScalarKind::Decimal => Self::Decimal(Vec::new()),
            ScalarKind::Text => Self::Text(Vec::new()),
            ScalarKind::Bytes => Self::Bytes(Vec::new()),
            ScalarKind::Timestamp => Self::Timestamp(Vec::new()),
            ScalarKind::DateTime => Self::DateTime(Vec::new()),
            ScalarKind::Date => Self::Date(Vec::new()),
            ScalarKind::Instant => Self::Instant(Vec::new()),
            ScalarKind::Table => Self::Table(Vec::new()),
        }
    }

    #[must_use]
    pub const fn element_kind(&self) -> ScalarKind {
        match self {
            Self::TinyInt(_) => ScalarKind::TinyInt,
            Self::SmallInt(_) => ScalarKind::SmallInt,
            Self::Integer(_) => ScalarKind::Integer,
            Self::BigInt(_) => ScalarKind::BigInt,
            Self::Float(_) => ScalarKind::Float,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Text(_) => ScalarKind::Text,
            Self::Bytes(_) => ScalarKind::Bytes,
            Self::Timestamp(_) => ScalarKind::Timestamp,
            Self::DateTime(_) => ScalarKind::DateTime,
            Self::Date(_) => ScalarKind::Date,
            Self::Instant(_) => ScalarKind::Instant,
            Self::Table(_) => ScalarKind::Table,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        for_each_array!(self, items => items.len())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.element_kind(), self.len())
    }
}
