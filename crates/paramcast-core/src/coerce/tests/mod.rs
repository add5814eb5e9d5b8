mod engine;
mod text;

use crate::{coerce::coerce, error::CoercionReason, param::ParamType, value::Value};

// ---- helpers -----------------------------------------------------------

fn ok(target: ParamType, input: impl Into<Value>) -> Value {
    coerce(&target, input.into()).expect("coercion succeeds")
}

fn reason(target: ParamType, input: impl Into<Value>) -> CoercionReason {
    coerce(&target, input.into())
        .expect_err("coercion fails")
        .reason
}
