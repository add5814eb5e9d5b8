//! Scalar kind registry shared by the coercion engine and its collaborators.
//!
//! Every per-kind fact (display name, routing family, fixed width, in-band
//! null sentinel) comes from one macro registry so matches stay exhaustive.

#[macro_use]
mod macros;

use std::fmt;

///
/// ScalarKind
///
/// Canonical scalar destination kind. Array parameters are described as
/// arrays of one of these kinds.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ScalarKind {
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
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    /// Stable diagnostic name (`long`, `short`, `string`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    #[must_use]
    pub const fn family(self) -> ScalarFamily {
        self.metadata().family
    }

    /// Bit width for fixed-width numerics, `None` otherwise.
    #[must_use]
    pub const fn width_bits(self) -> Option<u32> {
        match self.metadata().width_bits {
            0 => None,
            bits => Some(bits),
        }
    }

    /// Returns true if NULL for this kind is an in-band sentinel value.
    #[must_use]
    pub const fn has_null_sentinel(self) -> bool {
        self.metadata().has_null_sentinel
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self.family(), ScalarFamily::Integer)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self.family(), ScalarFamily::Temporal)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// ScalarMetadata
///
/// Per-kind facts shared across the engine.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub family: ScalarFamily,
    pub name: &'static str,
    pub width_bits: u32, // 0 = variable width
    pub has_null_sentinel: bool,
}

///
/// ScalarFamily
///
/// Coarse routing family used by the coercion dispatch table.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarFamily {
    Integer,
    Float,
    Decimal,
    Textual,
    Binary,
    Temporal,
    Tabular,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 13] = scalar_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
