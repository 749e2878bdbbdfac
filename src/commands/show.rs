use std::path::Path;

use anyhow::{anyhow, Result};

use crate::helpers::find_similar_name;
use crate::models::ResultParameter;
use crate::reader;

pub fn run(file: &Path, name: &str) -> Result<ResultParameter> {
    let result = reader::load_path(file)?;

    if let Some(param) = result.get(name) {
        return Ok(param.clone());
    }

    // Not found, try fuzzy matching for a helpful error
    let names: Vec<&str> = result.names().collect();
    if let Some(suggestion) = find_similar_name(name, &names) {
        Err(anyhow!(
            "Output parameter not found: {name}\nDid you mean: {suggestion}"
        ))
    } else {
        Err(anyhow!("Output parameter not found: {name}"))
    }
}
