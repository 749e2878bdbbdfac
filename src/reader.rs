use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{RawParameter, ResultParameter, RuleExecResult};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Load a rule execution result from a JSON-lines file, or stdin for `-`.
pub fn load_path(path: &Path) -> Result<RuleExecResult> {
    if path == Path::new(STDIN_PATH) {
        return load(io::stdin().lock()).context("Failed to read parameters from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    load(BufReader::new(file)).with_context(|| format!("Failed to load {}", path.display()))
}

/// Read one `{"name", "kind", "value"}` object per line.
pub fn load<R: BufRead>(reader: R) -> Result<RuleExecResult> {
    let mut result = RuleExecResult::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: RawParameter = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse parameter at line {}", line_num + 1))?;
        let param = ResultParameter::try_from(raw)
            .with_context(|| format!("Invalid parameter at line {}", line_num + 1))?;

        tracing::debug!(name = param.name(), kind = %param.kind(), line = line_num + 1, "loaded parameter");

        result
            .insert(param)
            .with_context(|| format!("Rejected parameter at line {}", line_num + 1))?;
    }

    Ok(result)
}
