use crate::value::Value;
use paramcast_primitives::ScalarKind;
use std::fmt::{self, Display};

///
/// ValueTag
///
/// Runtime kind of a [`Value`]. The scalar dispatch table is keyed on
/// (`ValueTag`, `ScalarKind`), so every variant of `Value` has exactly one
/// tag.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Null,
    Sigil,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Decimal,
    Text,
    Bytes,
    Timestamp,
    DateTime,
    Date,
    Instant,
    Table,
    Array,
    Context,
}

impl ValueTag {
    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Sigil => "null-sigil",
            Self::Array => "array",
            Self::Context => "context",
            _ => match self.scalar_kind() {
                Some(kind) => kind.name(),
                None => "unknown",
            },
        }
    }

    /// Scalar kind a value with this tag already represents, if any.
    #[must_use]
    pub const fn scalar_kind(self) -> Option<ScalarKind> {
        Some(match self {
            Self::TinyInt => ScalarKind::TinyInt,
            Self::SmallInt => ScalarKind::SmallInt,
            Self::Integer => ScalarKind::Integer,
            Self::BigInt => ScalarKind::BigInt,
            Self::Float => ScalarKind::Float,
            Self::Decimal => ScalarKind::Decimal,
            Self::Text => ScalarKind::Text,
            Self::Bytes => ScalarKind::Bytes,
            Self::Timestamp => ScalarKind::Timestamp,
            Self::DateTime => ScalarKind::DateTime,
            Self::Date => ScalarKind::Date,
            Self::Instant => ScalarKind::Instant,
            Self::Table => ScalarKind::Table,
            Self::Null | Self::Sigil | Self::Array | Self::Context => return None,
        })
    }

    /// Tag of a value that already holds `kind`.
    #[must_use]
    pub const fn of_kind(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::TinyInt => Self::TinyInt,
            ScalarKind::SmallInt => Self::SmallInt,
            ScalarKind::Integer => Self::Integer,
            ScalarKind::BigInt => Self::BigInt,
            ScalarKind::Float => Self::Float,
            ScalarKind::Decimal => Self::Decimal,
            ScalarKind::Text => Self::Text,
            ScalarKind::Bytes => Self::Bytes,
            ScalarKind::Timestamp => Self::Timestamp,
            ScalarKind::DateTime => Self::DateTime,
            ScalarKind::Date => Self::Date,
            ScalarKind::Instant => Self::Instant,
            ScalarKind::Table => Self::Table,
        }
    }
}

impl Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runtime tag of `value`.
#[must_use]
pub(super) const fn tag_of(value: &Value) -> ValueTag {
    match value {
        Value::Null => ValueTag::Null,
        Value::Sigil(_) => ValueTag::Sigil,
        Value::TinyInt(_) => ValueTag::TinyInt,
        Value::SmallInt(_) => ValueTag::SmallInt,
        Value::Integer(_) => ValueTag::Integer,
        Value::BigInt(_) => ValueTag::BigInt,
        Value::Float(_) => ValueTag::Float,
        Value::Decimal(_) => ValueTag::Decimal,
        Value::Text(_) => ValueTag::Text,
        Value::Bytes(_) => ValueTag::Bytes,
        Value::Timestamp(_) => ValueTag::Timestamp,
        Value::DateTime(_) => ValueTag::DateTime,
        Value::Date(_) => ValueTag::Date,
        Value::Instant(_) => ValueTag::Instant,
        Value::Table(_) => ValueTag::Table,
        Value::Array(_) => ValueTag::Array,
        Value::Context(_) => ValueTag::Context,
    }
}
