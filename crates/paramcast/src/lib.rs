//! ## Crate layout
//! - `core`: value model, declared parameter types, and the coercion engine.
//! - `primitives`: the scalar-kind registry shared by every crate.
//!
//! The `prelude` module carries the vocabulary a procedure runner needs to
//! coerce an invocation; errors, sinks, and config stay in their modules.

pub use paramcast_core as core;
pub use paramcast_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use paramcast_core::{
    CSV_NULL,
    config::{CoercionConfig, ConfigError},
    error::{CoercionError, CoercionReason, ParameterError},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::{obs::CoercionSink as _, types::ContextOf};
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn version_matches_manifest() {
        assert!(!crate::VERSION.is_empty());
        assert_eq!(crate::VERSION.split('.').count(), 3);
    }

    #[test]
    fn prelude_drives_a_coercion() {
        struct Session;

        let engine = Coercer::new().with_context(ContextOf::<Session>::new());
        let handle = Value::Context(ContextHandle::new(Session));

        assert_eq!(
            engine.coerce(&ParamType::Context, handle.clone()),
            Ok(handle)
        );
        assert_eq!(
            coerce(&ParamType::Scalar(ScalarKind::Text), Value::from(crate::CSV_NULL)),
            Ok(null_for(&ParamType::Scalar(ScalarKind::Text)))
        );
    }
}
