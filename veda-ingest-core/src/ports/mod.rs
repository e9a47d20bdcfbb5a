// veda-ingest-core/src/ports/mod.rs

pub mod tenant_source;

pub use tenant_source::{TenantSource, TenantSourceError};
