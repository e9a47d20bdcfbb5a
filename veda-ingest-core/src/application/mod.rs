// veda-ingest-core/src/application/mod.rs

pub mod enrichment;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use veda_ingest_core::application::{enrich_schema_with_tenants, TenantSchemaEnricher};`

pub use enrichment::{
    EnrichedSchema, EnrichmentError, SchemaState, TenantSchemaEnricher, enrich_schema,
    enrich_schema_with_tenants,
};
