use crate::{param::ParamType, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

// Offending values are quoted in diagnostics up to this many characters.
const VALUE_TEXT_LIMIT: usize = 128;

///
/// CoercionReason
///
/// Why a value could not be converted. Labels are stable and safe to use
/// as metric keys.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CoercionReason {
    UnsupportedPair,
    RangeOverflow,
    SentinelCollision,
    ArrayScalarMismatch,
    ElementTypeMismatch,
    FormatParse,
    Encoding,
}

impl CoercionReason {
    pub const ALL: [Self; 7] = [
        Self::UnsupportedPair,
        Self::RangeOverflow,
        Self::SentinelCollision,
        Self::ArrayScalarMismatch,
        Self::ElementTypeMismatch,
        Self::FormatParse,
        Self::Encoding,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnsupportedPair => "unsupported_pair",
            Self::RangeOverflow => "range_overflow",
            Self::SentinelCollision => "sentinel_collision",
            Self::ArrayScalarMismatch => "array_scalar_mismatch",
            Self::ElementTypeMismatch => "element_type_mismatch",
            Self::FormatParse => "format_parse",
            Self::Encoding => "encoding",
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::UnsupportedPair => "no conversion exists between these types",
            Self::RangeOverflow => "value is out of range",
            Self::SentinelCollision => "value equals the destination null sentinel",
            Self::ArrayScalarMismatch => "array and scalar cannot be converted into each other",
            Self::ElementTypeMismatch => "array element types differ",
            Self::FormatParse => "text could not be parsed",
            Self::Encoding => "value is not validly encoded",
        }
    }
}

impl fmt::Display for CoercionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

///
/// CoercionError
///
/// The single failure the engine reports. Carries no parameter position;
/// see [`ParameterError`] for the enriched form.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("cannot coerce value ({value}) of type {source_type} to {target_type}: {reason}")]
pub struct CoercionError {
    pub value: String,
    pub source_type: String,
    pub target_type: String,
    pub reason: CoercionReason,
}

impl CoercionError {
    #[must_use]
    pub fn new(reason: CoercionReason, value: &Value, target: &ParamType) -> Self {
        Self {
            value: value_text(value),
            source_type: source_type_name(value),
            target_type: target.to_string(),
            reason,
        }
    }
}

///
/// ParameterError
///
/// Failure of a whole parameter set, positioned for the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParameterError {
    #[error("procedure expects {expected} parameters, got {found}")]
    Arity { expected: usize, found: usize },

    #[error("parameter {position}: {source}")]
    Coercion {
        position: usize,
        source: CoercionError,
    },
}

impl ParameterError {
    /// Coercion failure, if this is one.
    #[must_use]
    pub const fn coercion(&self) -> Option<&CoercionError> {
        match self {
            Self::Coercion { source, .. } => Some(source),
            Self::Arity { .. } => None,
        }
    }
}

fn source_type_name(value: &Value) -> String {
    match value {
        Value::Array(array) => ParamType::Array(array.element_kind()).to_string(),
        _ => value.tag().label().to_string(),
    }
}

fn value_text(value: &Value) -> String {
    let text = value.to_string();

    match text.char_indices().nth(VALUE_TEXT_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ArrayValue;
    use paramcast_primitives::ScalarKind;

    #[test]
    fn message_names_both_types_and_the_value() {
        let err = CoercionError::new(
            CoercionReason::SentinelCollision,
            &Value::BigInt(-32768),
            &ParamType::SMALLINT,
        );

        let message = err.to_string();
        assert!(message.contains("(-32768)"), "{message}");
        assert!(message.contains("long"), "{message}");
        assert!(message.contains("short"), "{message}");
    }

    #[test]
    fn arrays_are_named_by_element_type() {
        let value = Value::Array(ArrayValue::from(vec!["a".to_string()]));
        let err = CoercionError::new(
            CoercionReason::ElementTypeMismatch,
            &value,
            &ParamType::Array(ScalarKind::BigInt),
        );

        assert_eq!(err.source_type, "string[]");
        assert_eq!(err.target_type, "long[]");
        assert_eq!(err.value, "string[1]");
    }

    #[test]
    fn long_values_are_truncated() {
        let value = Value::from("x".repeat(1_000));
        let err = CoercionError::new(CoercionReason::FormatParse, &value, &ParamType::BIGINT);

        assert_eq!(err.value.len(), VALUE_TEXT_LIMIT + 3);
        assert!(err.value.ends_with("..."));
    }

    #[test]
    fn reason_labels_are_unique_snake_case() {
        let mut labels: Vec<_> = CoercionReason::ALL.iter().map(|r| r.label()).collect();
        labels.sort_unstable();
        labels.dedup();

        assert_eq!(labels.len(), CoercionReason::ALL.len());
        for label in labels {
            assert!(label.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn parameter_errors_carry_position() {
        let source = CoercionError::new(
            CoercionReason::FormatParse,
            &Value::from("abc"),
            &ParamType::INTEGER,
        );
        let err = ParameterError::Coercion {
            position: 2,
            source: source.clone(),
        };

        assert!(err.to_string().starts_with("parameter 2: cannot coerce"));
        assert_eq!(err.coercion(), Some(&source));
        assert!(std::error::Error::source(&err).is_some());
    }
}
