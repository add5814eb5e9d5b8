//! The coercion engine.
//!
//! One call turns a loosely typed [`Value`] into the exact representation
//! a [`ParamType`] declares, or fails with a [`CoercionError`]. Each call
//! runs, in order: the exact-representation fast path, null-sigil
//! resolution, the array/scalar shape check, array or scalar dispatch,
//! and (when configured) verification of the result.

mod array;
mod decimal;
mod null;
mod numeric;
mod params;
mod route;
mod scalar;
mod temporal;
mod text;
mod verify;

#[cfg(test)]
mod tests;

use crate::{
    config::CoercionConfig,
    error::{CoercionError, CoercionReason},
    obs::{CoercionEvent, CoercionSink, NoopSink},
    param::ParamType,
    types::{ContextCapability, NoContext},
    value::Value,
};
use paramcast_primitives::ScalarKind;

// re-exports
pub use null::null_for;
pub use numeric::parse_integer_text;
pub use route::{Conversion, Route, scalar_route};

static DEFAULT_COERCER: Coercer = Coercer::new();

///
/// Coercer
///
/// Coercion engine. `C` decides which runtime values satisfy the
/// execution-context parameter and `S` receives one event per call.
/// Immutable once built and shareable across threads when `C` and `S`
/// are.
///

#[derive(Clone, Debug, Default)]
pub struct Coercer<C = NoContext, S = NoopSink> {
    config: CoercionConfig,
    context: C,
    sink: S,
}

impl Coercer {
    /// Engine with default config, no context capability and no sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: CoercionConfig::new(),
            context: NoContext,
            sink: NoopSink,
        }
    }
}

impl<C, S> Coercer<C, S> {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub fn with_config(self, config: CoercionConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn with_context<C2: ContextCapability>(self, context: C2) -> Coercer<C2, S> {
        Coercer {
            config: self.config,
            context,
            sink: self.sink,
        }
    }

    #[must_use]
    pub fn with_sink<S2: CoercionSink>(self, sink: S2) -> Coercer<C, S2> {
        Coercer {
            config: self.config,
            context: self.context,
            sink,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CoercionConfig {
        &self.config
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

impl<C: ContextCapability, S: CoercionSink> Coercer<C, S> {
    /// Coerce `input` to the representation `target` declares.
    pub fn coerce(&self, target: &ParamType, input: Value) -> Result<Value, CoercionError> {
        match self.resolve(target, input) {
            Ok((value, event)) => {
                self.sink.record(event);
                if self.config.verify_results {
                    let verified = self.verify(&value, target);
                    if !verified {
                        self.sink.record(CoercionEvent::VerificationFailed);
                    }
                    debug_assert!(verified, "coerced value {value:?} does not verify as {target}");
                }

                Ok(value)
            }
            Err(err) => {
                self.sink.record(CoercionEvent::Rejected { reason: err.reason });

                Err(err)
            }
        }
    }

    /// True when `value` has exactly the representation `target` declares.
    #[must_use]
    pub fn verify(&self, value: &Value, target: &ParamType) -> bool {
        verify::verify_value(value, target, &self.context)
    }

    fn resolve(
        &self,
        target: &ParamType,
        input: Value,
    ) -> Result<(Value, CoercionEvent), CoercionError> {
        if is_exact(&input, target) {
            return Ok((input, CoercionEvent::Passthrough));
        }

        if null::is_null_input(&input) {
            return Ok((null_for(target), CoercionEvent::NullResolved));
        }

        match *target {
            ParamType::Context => {
                let accepted =
                    matches!(&input, Value::Context(handle) if self.context.accepts(handle));
                if accepted {
                    Ok((input, CoercionEvent::Passthrough))
                } else {
                    Err(reject(CoercionReason::UnsupportedPair, &input, target))
                }
            }
            ParamType::Array(element) => {
                let Value::Array(array) = &input else {
                    return Err(reject(CoercionReason::ArrayScalarMismatch, &input, target));
                };

                match array::coerce_array(element, array) {
                    Ok((event, out)) => Ok((Value::Array(out), event)),
                    Err(reason) => Err(reject(reason, &input, target)),
                }
            }
            ParamType::Scalar(kind) => self.resolve_scalar(kind, target, input),
        }
    }

    fn resolve_scalar(
        &self,
        kind: ScalarKind,
        target: &ParamType,
        input: Value,
    ) -> Result<(Value, CoercionEvent), CoercionError> {
        match scalar_route(input.tag(), kind) {
            Route::Identity => Ok((input, CoercionEvent::Passthrough)),
            Route::Reject(reason) => Err(reject(reason, &input, target)),
            Route::Convert(conversion) => {
                match scalar::convert(conversion, kind, &input, &self.config) {
                    Ok(Value::Null) => Ok((Value::Null, CoercionEvent::NullResolved)),
                    Ok(value) => Ok((value, CoercionEvent::Converted { conversion })),
                    Err(reason) => Err(reject(reason, &input, target)),
                }
            }
        }
    }
}

/// Coerce with the default engine.
pub fn coerce(target: &ParamType, input: Value) -> Result<Value, CoercionError> {
    DEFAULT_COERCER.coerce(target, input)
}

/// Verify with the default engine; no context value is accepted.
#[must_use]
pub fn verify(value: &Value, target: &ParamType) -> bool {
    DEFAULT_COERCER.verify(value, target)
}

// Inputs that already are what the destination stores. Text is excluded
// so the CSV null token is always seen; decimals must already be at the
// default scale.
fn is_exact(input: &Value, target: &ParamType) -> bool {
    match (target, input) {
        (ParamType::Scalar(ScalarKind::Text), _) | (ParamType::Context, _) => false,
        (ParamType::Scalar(ScalarKind::Decimal), Value::Decimal(decimal)) => decimal.is_canonical(),
        (ParamType::Scalar(kind), value) => value.tag().scalar_kind() == Some(*kind),
        (ParamType::Array(kind), Value::Array(array)) => array.element_kind() == *kind,
        (ParamType::Array(_), _) => false,
    }
}

fn reject(reason: CoercionReason, input: &Value, target: &ParamType) -> CoercionError {
    CoercionError::new(reason, input, target)
}
