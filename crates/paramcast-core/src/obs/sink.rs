//! Coercion event boundary.
//!
//! The engine never counts anything itself. Every outcome is described as
//! a `CoercionEvent` and handed to the `CoercionSink` the engine was built
//! with.

use crate::{coerce::Conversion, error::CoercionReason};
use std::sync::Arc;

///
/// CoercionEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoercionEvent {
    /// Input already had the destination representation.
    Passthrough,

    /// Input was a null sigil; the destination null was produced.
    NullResolved,

    Converted {
        conversion: Conversion,
    },

    /// An empty array took on the destination element kind.
    EmptyArrayRetyped,

    Rejected {
        reason: CoercionReason,
    },

    /// A produced value failed the postcondition check.
    VerificationFailed,
}

///
/// CoercionSink
///

pub trait CoercionSink {
    fn record(&self, event: CoercionEvent);
}

impl<S: CoercionSink + ?Sized> CoercionSink for &S {
    fn record(&self, event: CoercionEvent) {
        (**self).record(event);
    }
}

impl<S: CoercionSink + ?Sized> CoercionSink for Arc<S> {
    fn record(&self, event: CoercionEvent) {
        (**self).record(event);
    }
}

///
/// NoopSink
///
/// Default sink. Discards every event.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl CoercionSink for NoopSink {
    fn record(&self, _: CoercionEvent) {}
}
