use crate::{
    coerce::Coercer,
    error::ParameterError,
    obs::CoercionSink,
    param::ParamType,
    types::ContextCapability,
    value::Value,
};

impl<C: ContextCapability, S: CoercionSink> Coercer<C, S> {
    /// Coerce a whole invocation, position by position.
    ///
    /// The first failure wins and carries its zero-based position; nothing
    /// is returned for the parameters that did convert.
    pub fn coerce_parameters(
        &self,
        declared: &[ParamType],
        params: Vec<Value>,
    ) -> Result<Vec<Value>, ParameterError> {
        if declared.len() != params.len() {
            return Err(ParameterError::Arity {
                expected: declared.len(),
                found: params.len(),
            });
        }

        declared
            .iter()
            .zip(params)
            .enumerate()
            .map(|(position, (target, value))| {
                self.coerce(target, value)
                    .map_err(|source| ParameterError::Coercion { position, source })
            })
            .collect()
    }
}
