pub mod error;
pub mod form;
pub mod profile;
pub mod schema;
pub mod text;
pub mod thumbnail;

// Shortcuts for the rest of the crate and the CLI.
pub use error::DomainError;
pub use profile::{EnvConfig, Profile};
pub use schema::TenantField;
