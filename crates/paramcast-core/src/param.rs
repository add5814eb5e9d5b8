use paramcast_primitives::{ALL_SCALAR_KINDS, ScalarKind};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

const ARRAY_SUFFIX: &str = "[]";
const CONTEXT_NAME: &str = "context";

///
/// ParamTypeParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown parameter type '{0}'")]
pub struct ParamTypeParseError(pub String);

///
/// ParamType
///
/// Declared type of one procedure parameter. Resolved once, when the
/// procedure is registered, and never mutated.
///
/// Text form: the kind name (`short`), the kind name with `[]` for arrays
/// (`varbinary[]`), or `context` for the execution-context marker.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub enum ParamType {
    Scalar(ScalarKind),
    Array(ScalarKind),
    Context,
}

impl ParamType {
    pub const TINYINT: Self = Self::Scalar(ScalarKind::TinyInt);
    pub const SMALLINT: Self = Self::Scalar(ScalarKind::SmallInt);
    pub const INTEGER: Self = Self::Scalar(ScalarKind::Integer);
    pub const BIGINT: Self = Self::Scalar(ScalarKind::BigInt);
    pub const FLOAT: Self = Self::Scalar(ScalarKind::Float);
    pub const DECIMAL: Self = Self::Scalar(ScalarKind::Decimal);
    pub const TEXT: Self = Self::Scalar(ScalarKind::Text);
    pub const BYTES: Self = Self::Scalar(ScalarKind::Bytes);
    pub const TIMESTAMP: Self = Self::Scalar(ScalarKind::Timestamp);
    pub const DATETIME: Self = Self::Scalar(ScalarKind::DateTime);
    pub const DATE: Self = Self::Scalar(ScalarKind::Date);
    pub const INSTANT: Self = Self::Scalar(ScalarKind::Instant);
    pub const TABLE: Self = Self::Scalar(ScalarKind::Table);

    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Scalar kind of a scalar parameter, `None` for arrays and context.
    #[must_use]
    pub const fn scalar(self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) => Some(kind),
            Self::Array(_) | Self::Context => None,
        }
    }

    /// Element kind of an array parameter.
    #[must_use]
    pub const fn element(self) -> Option<ScalarKind> {
        match self {
            Self::Array(kind) => Some(kind),
            Self::Scalar(_) | Self::Context => None,
        }
    }
}

impl From<ScalarKind> for ParamType {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => f.write_str(kind.name()),
            Self::Array(kind) => write!(f, "{}{ARRAY_SUFFIX}", kind.name()),
            Self::Context => f.write_str(CONTEXT_NAME),
        }
    }
}

impl FromStr for ParamType {
    type Err = ParamTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CONTEXT_NAME {
            return Ok(Self::Context);
        }

        let (name, array) = match s.strip_suffix(ARRAY_SUFFIX) {
            Some(name) => (name, true),
            None => (s, false),
        };

        let kind = ALL_SCALAR_KINDS
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ParamTypeParseError(s.to_string()))?;

        Ok(if array {
            Self::Array(kind)
        } else {
            Self::Scalar(kind)
        })
    }
}

impl From<ParamType> for String {
    fn from(ty: ParamType) -> Self {
        ty.to_string()
    }
}

impl TryFrom<String> for ParamType {
    type Error = ParamTypeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

///
/// TESTS
///
