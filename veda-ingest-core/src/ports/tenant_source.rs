// veda-ingest-core/src/ports/tenant_source.rs

// The capability the enrichment pipeline needs: "give me the tenants this user may act upon".
// Where the list comes from (HTTP directory, static placeholder, test double) is an adapter concern.

use async_trait::async_trait;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TenantSourceError {
    #[error("Failed to fetch tenants: {0}")]
    #[diagnostic(
        code(veda::tenants::status),
        help("The tenant listing endpoint answered with a non-success status.")
    )]
    Status(String),

    #[error("Tenant request failed: {0}")]
    #[diagnostic(code(veda::tenants::transport))]
    Transport(#[from] reqwest::Error),

    #[error("Tenant payload is not a JSON array of strings: {0}")]
    #[diagnostic(code(veda::tenants::decode))]
    Decode(#[from] serde_json::Error),

    #[error("Tenant source unavailable: {0}")]
    #[diagnostic(code(veda::tenants::unavailable))]
    Unavailable(String),
}

#[async_trait]
pub trait TenantSource: Send + Sync {
    /// Ordered tenant identifiers. Duplicates are passed through untouched.
    async fn fetch_tenants(&self) -> Result<Vec<String>, TenantSourceError>;
}
