// veda-ingest-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::tenant_source::TenantSourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    // --- DOMAIN (filenames, schema shape) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (IO, settings parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- TENANT DIRECTORY ---
    #[error(transparent)]
    TenantSource(#[from] TenantSourceError),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Infrastructure(InfrastructureError::Io(err))
    }
}
