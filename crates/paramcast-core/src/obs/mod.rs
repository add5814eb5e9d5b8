//! Observability: coercion events and the sinks that receive them.
//!
//! The engine reports through `CoercionSink` only; counting lives here.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{CoercionMetrics, MetricsSnapshot};
pub use sink::{CoercionEvent, CoercionSink, NoopSink};
