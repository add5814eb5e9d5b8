//! Concrete value representations the engine reads and produces.

mod context;
mod date;
mod decimal;
mod fixed;
mod table;
mod timestamp;

pub use context::{ContextCapability, ContextHandle, ContextOf, NoContext};
pub use date::Date;
pub use decimal::{DEFAULT_SCALE, Decimal, DecimalError, MAX_PRECISION};
pub use fixed::{
    FixedWidthInt, NULL_BIGINT, NULL_FLOAT, NULL_FLOAT_BITS, NULL_INTEGER, NULL_SMALLINT,
    NULL_TINYINT, NarrowFault, NullableFixedWidth, narrow,
};
pub use table::{Column, Table, TableShapeError};
pub use timestamp::{DateTime, EpochTime, Instant, Timestamp};
