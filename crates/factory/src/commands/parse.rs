//! `factory parse <file>`

use anyhow::{Context, Result};
use factory_config::ConfigError;
use std::io::Write;
use std::path::Path;

pub fn execute(file: &Path, out: &mut impl Write) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let node = factory_yaml::parse(&text).map_err(|source| ConfigError::MalformedBlock {
        path: file.to_path_buf(),
        source,
    })?;

    writeln!(out, "{}", serde_json::to_string_pretty(&node.to_json())?)?;
    Ok(())
}
