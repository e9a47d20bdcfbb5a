// veda-ingest-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(veda::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- SETTINGS / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(veda::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(code(veda::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    #[diagnostic(code(veda::infra::settings))]
    InvalidSettings(#[from] validator::ValidationErrors),

    #[error("Settings file not found at '{0}'")]
    #[diagnostic(code(veda::infra::config_missing))]
    ConfigNotFound(String),

    #[error("HTTP client setup failed: {0}")]
    #[diagnostic(code(veda::infra::http))]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
