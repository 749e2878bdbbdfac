use std::path::Path;

use anyhow::Result;

use crate::models::{OutputParamType, RuleExecResult};
use crate::reader;

/// Load a result file, keeping only parameters of `kind` when given.
pub fn run(file: &Path, kind: Option<OutputParamType>) -> Result<RuleExecResult> {
    let result = reader::load_path(file)?;
    tracing::debug!(file = %file.display(), count = result.len(), "loaded result set");

    match kind {
        Some(kind) => Ok(RuleExecResult::try_from_parameters(
            result.of_kind(kind).cloned(),
        )?),
        None => Ok(result),
    }
}
