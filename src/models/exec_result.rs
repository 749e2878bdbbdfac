use indexmap::IndexMap;
use serde::Serialize;

use super::{OutputParamType, ResultParameter};
use crate::error::ResultSetError;

/// Output parameters of a single rule execution, keyed by name in the order
/// the engine returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleExecResult {
    parameters: IndexMap<String, ResultParameter>,
}

impl RuleExecResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect parameters, failing on the first repeated name.
    pub fn try_from_parameters<I>(parameters: I) -> Result<Self, ResultSetError>
    where
        I: IntoIterator<Item = ResultParameter>,
    {
        let mut result = Self::new();
        for param in parameters {
            result.insert(param)?;
        }
        Ok(result)
    }

    pub fn insert(&mut self, param: ResultParameter) -> Result<(), ResultSetError> {
        if self.parameters.contains_key(param.name()) {
            return Err(ResultSetError::DuplicateParameter(param.name().to_string()));
        }
        self.parameters.insert(param.name().to_string(), param);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ResultParameter> {
        self.parameters.get(name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultParameter> {
        self.parameters.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    pub fn of_kind(&self, kind: OutputParamType) -> impl Iterator<Item = &ResultParameter> {
        self.iter().filter(move |p| p.kind() == kind)
    }

    /// The engine's captured stdout/stderr buffer, when the rule declared one.
    pub fn rule_exec_out(&self) -> Option<&ResultParameter> {
        self.of_kind(OutputParamType::RuleExecOut).next()
    }
}

impl<'a> IntoIterator for &'a RuleExecResult {
    type Item = &'a ResultParameter;
    type IntoIter = indexmap::map::Values<'a, String, ResultParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.values()
    }
}
