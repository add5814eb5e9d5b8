use crate::{
    coerce::{Coercer, Conversion, Route, coerce, null_for, scalar_route, verify},
    config::CoercionConfig,
    error::{CoercionReason, ParameterError},
    obs::{CoercionEvent, CoercionMetrics, CoercionSink},
    param::ParamType,
    types::{ContextHandle, ContextOf, Decimal},
    value::{ArrayValue, Value, ValueTag},
};
use paramcast_primitives::{ALL_SCALAR_KINDS, ScalarKind};
use std::{cell::RefCell, collections::HashSet, sync::Arc};

struct SystemContext;
struct UserContext;

///
/// RecordingSink
///

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<CoercionEvent>>,
}

impl CoercionSink for RecordingSink {
    fn record(&self, event: CoercionEvent) {
        self.events.borrow_mut().push(event);
    }
}

// ---- context marker ----------------------------------------------------

#[test]
fn context_requires_a_capability() {
    let handle = ContextHandle::new(SystemContext);

    let err = coerce(&ParamType::Context, Value::Context(handle)).expect_err("no capability");
    assert_eq!(err.reason, CoercionReason::UnsupportedPair);
}

#[test]
fn context_capability_passes_matching_handles_through() {
    let engine = Coercer::new().with_context(ContextOf::<SystemContext>::new());
    let handle = ContextHandle::new(SystemContext);

    let out = engine
        .coerce(&ParamType::Context, Value::Context(handle.clone()))
        .expect("accepted context");
    assert_eq!(out, Value::Context(handle));

    let other = Value::Context(ContextHandle::new(UserContext));
    let err = engine
        .coerce(&ParamType::Context, other)
        .expect_err("foreign context");
    assert_eq!(err.reason, CoercionReason::UnsupportedPair);

    assert_eq!(
        engine.coerce(&ParamType::Context, Value::from("ctx")).map_err(|e| e.reason),
        Err(CoercionReason::UnsupportedPair)
    );
}

#[test]
fn context_values_are_not_scalars() {
    let engine = Coercer::new().with_context(ContextOf::<SystemContext>::new());
    let handle = Value::Context(ContextHandle::new(SystemContext));

    let err = engine.coerce(&ParamType::TEXT, handle).expect_err("context to text");
    assert_eq!(err.reason, CoercionReason::UnsupportedPair);
}

// ---- verification ------------------------------------------------------

#[test]
fn verify_demands_exact_representation() {
    assert!(verify(&null_for(&ParamType::SMALLINT), &ParamType::SMALLINT));
    assert!(!verify(&Value::Null, &ParamType::SMALLINT));
    assert!(!verify(&Value::Integer(1), &ParamType::SMALLINT));

    assert!(verify(&Value::Null, &ParamType::TEXT));
    assert!(verify(&Value::Decimal(Decimal::zero()), &ParamType::DECIMAL));
    assert!(!verify(&Value::Decimal(Decimal::new(1, 2)), &ParamType::DECIMAL));

    let texts = Value::Array(ArrayValue::empty(ScalarKind::Text));
    assert!(verify(&texts, &ParamType::Array(ScalarKind::Text)));
    assert!(!verify(&texts, &ParamType::Array(ScalarKind::Bytes)));
    assert!(!verify(&texts, &ParamType::TEXT));
    assert!(verify(&Value::Null, &ParamType::Array(ScalarKind::Bytes)));
}

#[test]
fn verify_asks_the_capability_for_context() {
    let handle = Value::Context(ContextHandle::new(SystemContext));
    let engine = Coercer::new().with_context(ContextOf::<SystemContext>::new());

    assert!(!verify(&handle, &ParamType::Context));
    assert!(engine.verify(&handle, &ParamType::Context));
    assert!(engine.verify(&Value::Null, &ParamType::Context));
}

// ---- parameter sets ----------------------------------------------------

#[test]
fn parameter_sets_check_arity() {
    let err = Coercer::new()
        .coerce_parameters(&[ParamType::BIGINT, ParamType::TEXT], vec![Value::BigInt(1)])
        .expect_err("arity");

    assert_eq!(
        err,
        ParameterError::Arity {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn parameter_sets_report_the_failing_position() {
    let declared = [ParamType::BIGINT, ParamType::SMALLINT, ParamType::TEXT];
    let params = vec![Value::from("7"), Value::BigInt(-32_768), Value::from("x")];

    let err = Coercer::new()
        .coerce_parameters(&declared, params)
        .expect_err("collision");

    let ParameterError::Coercion { position, source } = err else {
        panic!("expected a coercion failure");
    };
    assert_eq!(position, 1);
    assert_eq!(source.reason, CoercionReason::SentinelCollision);
}

#[test]
fn parameter_sets_convert_every_position() {
    let declared = [
        ParamType::BIGINT,
        ParamType::Array(ScalarKind::Bytes),
        ParamType::TEXT,
    ];
    let params = vec![
        Value::Integer(7),
        Value::Array(ArrayValue::Text(vec!["00".to_string()])),
        Value::from("\\N"),
    ];

    let out = Coercer::new()
        .coerce_parameters(&declared, params)
        .expect("all convert");

    assert_eq!(
        out,
        vec![
            Value::BigInt(7),
            Value::Array(ArrayValue::Bytes(vec![vec![0]])),
            Value::Null,
        ]
    );
}

// ---- events ------------------------------------------------------------

#[test]
fn each_call_records_one_outcome() {
    let engine = Coercer::new()
        .with_config(CoercionConfig {
            verify_results: false,
            ..CoercionConfig::default()
        })
        .with_sink(RecordingSink::default());

    let _ = engine.coerce(&ParamType::BIGINT, Value::BigInt(1));
    let _ = engine.coerce(&ParamType::BIGINT, Value::Null);
    let _ = engine.coerce(&ParamType::BIGINT, Value::from("2"));
    let _ = engine.coerce(&ParamType::TEXT, Value::from("plain"));
    let _ = engine.coerce(&ParamType::SMALLINT, Value::BigInt(1 << 20));

    assert_eq!(
        *engine.sink().events.borrow(),
        vec![
            CoercionEvent::Passthrough,
            CoercionEvent::NullResolved,
            CoercionEvent::Converted {
                conversion: Conversion::ParseNumber
            },
            CoercionEvent::Passthrough,
            CoercionEvent::Rejected {
                reason: CoercionReason::RangeOverflow
            },
        ]
    );
}

#[test]
fn array_calls_record_their_own_events() {
    fn texts(items: &[&str]) -> Value {
        Value::Array(ArrayValue::Text(items.iter().map(ToString::to_string).collect()))
    }

    let engine = Coercer::new().with_sink(RecordingSink::default());

    let _ = engine.coerce(&ParamType::Array(ScalarKind::Text), texts(&["a"]));
    let _ = engine.coerce(&ParamType::Array(ScalarKind::Bytes), texts(&["41"]));
    let _ = engine.coerce(&ParamType::Array(ScalarKind::Date), texts(&[]));

    assert_eq!(
        *engine.sink().events.borrow(),
        vec![
            CoercionEvent::Passthrough,
            CoercionEvent::Converted {
                conversion: Conversion::HexDecode
            },
            CoercionEvent::EmptyArrayRetyped,
        ]
    );
}

#[test]
fn shared_metrics_count_across_engines() {
    let metrics = Arc::new(CoercionMetrics::new());
    let first = Coercer::new().with_sink(Arc::clone(&metrics));
    let second = Coercer::new().with_sink(Arc::clone(&metrics));

    first.coerce(&ParamType::BYTES, Value::from("ff")).expect("hex");
    second.coerce(&ParamType::BYTES, Value::from("00")).expect("hex");
    let _ = second.coerce(&ParamType::BYTES, Value::from("0"));

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.converted.get("hex_decode"), Some(&2));
    assert_eq!(snapshot.rejected.get("encoding"), Some(&1));
    assert_eq!(snapshot.verification_failed, 0);
}

// ---- dispatch table ----------------------------------------------------

#[test]
fn same_kind_routes_are_identity_except_decimal() {
    for kind in ALL_SCALAR_KINDS {
        let expected = if kind == ScalarKind::Decimal {
            Route::Convert(Conversion::RescaleDecimal)
        } else {
            Route::Identity
        };
        assert_eq!(scalar_route(ValueTag::of_kind(kind), kind), expected, "{kind}");
    }
}

#[test]
fn only_text_reaches_bytes() {
    for kind in ALL_SCALAR_KINDS {
        let route = scalar_route(ValueTag::of_kind(kind), ScalarKind::Bytes);
        match kind {
            ScalarKind::Text => assert_eq!(route, Route::Convert(Conversion::HexDecode)),
            ScalarKind::Bytes => assert_eq!(route, Route::Identity),
            _ => assert_eq!(route, Route::Reject(CoercionReason::UnsupportedPair), "{kind}"),
        }
    }
}

#[test]
fn every_conversion_has_a_matrix_entry() {
    let reached: HashSet<Conversion> = ALL_SCALAR_KINDS
        .into_iter()
        .flat_map(|input| {
            ALL_SCALAR_KINDS
                .into_iter()
                .map(move |target| scalar_route(ValueTag::of_kind(input), target))
        })
        .filter_map(|route| match route {
            Route::Convert(conversion) => Some(conversion),
            Route::Identity | Route::Reject(_) => None,
        })
        .collect();

    for conversion in Conversion::ALL {
        assert!(reached.contains(&conversion), "unreachable {conversion:?}");
    }
}

#[test]
fn null_tags_have_no_matrix_entry() {
    for kind in ALL_SCALAR_KINDS {
        for tag in [ValueTag::Null, ValueTag::Sigil] {
            assert_eq!(
                scalar_route(tag, kind),
                Route::Reject(CoercionReason::UnsupportedPair),
                "route mismatch for {tag} to {kind}"
            );
        }
    }
}
