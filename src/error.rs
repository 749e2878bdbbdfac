use thiserror::Error;

/// Invalid-argument failures raised while constructing a
/// [`ResultParameter`](crate::models::ResultParameter).
///
/// Each variant names the precondition that was violated. The messages are
/// stable and are what callers see when they surface the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("parameterName is null or empty")]
    EmptyName,
    #[error("outputParamType is null")]
    MissingKind,
    #[error("resultObject is null")]
    MissingPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultSetError {
    #[error("duplicate output parameter: {0}")]
    DuplicateParameter(String),
}
