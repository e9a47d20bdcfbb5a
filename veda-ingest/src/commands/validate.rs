// veda-ingest/src/commands/validate.rs
//
// USE CASE: Pre-submission check of form data against its schema.

use std::path::PathBuf;

use veda_ingest_core::domain::form::{normalize_form_data, validate_form_data};

pub fn execute(schema_path: PathBuf, data_path: PathBuf) -> anyhow::Result<()> {
    let schema = super::read_json(&schema_path)?;
    let raw = super::read_json(&data_path)?;

    let data = normalize_form_data(&raw);
    let violations = validate_form_data(&schema, &data);

    println!("{}", serde_json::to_string_pretty(&data)?);

    if violations.is_empty() {
        eprintln!("✅ Form data is valid.");
        return Ok(());
    }

    eprintln!("\n⚠️  {} violation(s) detected:", violations.len());
    for v in &violations {
        eprintln!("   ❌ {}", v);
    }
    std::process::exit(1);
}
