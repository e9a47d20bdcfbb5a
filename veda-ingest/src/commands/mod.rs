// veda-ingest/src/commands/mod.rs

pub mod enrich;
pub mod profile;
pub mod serve;
pub mod text;
pub mod thumbnail;
pub mod validate;

use anyhow::Context;
use serde_json::Value;
use std::path::Path;

use veda_ingest_core::infrastructure::config::{Settings, load_settings, load_settings_from};

/// Explicit `--config` wins; otherwise look in the working directory.
pub fn settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(Path::new("."))?,
    };
    Ok(settings)
}

pub fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}
