// veda-ingest/src/commands/enrich.rs
//
// USE CASE: Render-time tenant enrichment of a form schema.

use std::path::{Path, PathBuf};
use tracing::info;

use veda_ingest_core::application::enrich_schema_with_tenants;
use veda_ingest_core::domain::TenantField;
use veda_ingest_core::infrastructure::tenants::tenant_source_from_settings;

pub async fn execute(
    config: Option<&Path>,
    schema_path: PathBuf,
    field: Option<TenantField>,
    tenants_url: Option<String>,
) -> anyhow::Result<()> {
    let mut settings = super::settings(config)?;
    if tenants_url.is_some() {
        settings.tenants_url = tenants_url;
    }
    let field = field.unwrap_or(settings.tenant_field);

    let base = super::read_json(&schema_path)?;
    let source = tenant_source_from_settings(&settings)?;
    info!(schema = ?schema_path, %field, url = ?settings.tenants_url, "Enriching schema");

    // A failed fetch is not fatal: the base schema is printed unchanged.
    let enriched = enrich_schema_with_tenants(&base, field, source.as_ref()).await;

    println!("{}", serde_json::to_string_pretty(&enriched.schema)?);
    Ok(())
}
