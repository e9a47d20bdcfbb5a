// veda-ingest-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid filename: '{0}'")]
    #[diagnostic(
        code(veda::domain::filename),
        help("Filenames must keep at least one ASCII letter, digit, '-' or '_' after sanitization.")
    )]
    InvalidFilename(String),

    #[error("Unknown profile: '{0}'")]
    #[diagnostic(
        code(veda::domain::profile),
        help("Expected one of: local, veda, disasters.")
    )]
    UnknownProfile(String),

    #[error("Schema Error: {0}")]
    #[diagnostic(code(veda::domain::schema))]
    SchemaError(String),
}
