//! Core runtime for paramcast: the value model, declared parameter types,
//! and the engine that coerces loosely typed procedure parameters into
//! exactly typed ones.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod coerce;
pub mod config;
pub mod error;
pub mod obs;
pub mod param;
pub mod types;
pub mod value;

///
/// CONSTANTS
///

/// Alternate spelling of NULL in text input, matched after trimming.
pub const CSV_NULL: &str = "\\N";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or config types are re-exported here.
///

pub mod prelude {
    pub use crate::{
        coerce::{Coercer, coerce, null_for},
        param::ParamType,
        types::{ContextCapability, ContextHandle, Decimal},
        value::{ArrayValue, NullSigil, Value},
    };
    pub use paramcast_primitives::ScalarKind;
}
