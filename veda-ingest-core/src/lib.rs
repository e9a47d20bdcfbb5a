// veda-ingest-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (capabilities the core needs from the outside world)
pub mod ports;

// 2. Domain: profiles, schema updates, text and form utilities.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters): settings loader, HTTP and static tenant sources.
pub mod infrastructure;

// 4. Application (Use Cases): tenant schema enrichment.
pub mod application;

pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::IngestError;
