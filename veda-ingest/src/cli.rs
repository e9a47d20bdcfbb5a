// veda-ingest/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use veda_ingest_core::domain::TenantField;
use veda_ingest_core::domain::text::DEFAULT_MAX_WORDS;

#[derive(Parser)]
#[command(name = "veda-ingest")]
#[command(about = "Tenant-aware schema tooling for VEDA metadata ingest", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./veda-ingest.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prints the resolved environment configuration as JSON
    Profile {
        /// Profile selector to resolve instead of the configured one
        #[arg(long)]
        env: Option<String>,
    },

    /// Lists every known profile
    Profiles,

    /// Adds the tenant directory to a form schema's tenant choices
    Enrich {
        /// JSON schema file
        #[arg(long)]
        schema: PathBuf,

        /// Tenant property to constrain (tenant | tenants)
        #[arg(long)]
        field: Option<TenantField>,

        /// Tenant listing endpoint (overrides settings)
        #[arg(long)]
        tenants_url: Option<String>,
    },

    /// Strips a filename down to ASCII letters, digits, '-' and '_'
    Sanitize { name: String },

    /// Shortens text to a word budget
    Truncate {
        text: String,

        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
    },

    /// Normalizes form data and checks it against a schema
    Validate {
        /// JSON schema file
        #[arg(long)]
        schema: PathBuf,

        /// JSON form data file
        #[arg(long)]
        data: PathBuf,
    },

    /// Derives the thumbnail object key and public URL for a file
    Thumbnail {
        filename: String,

        /// Profile selector to use instead of the configured one
        #[arg(long)]
        env: Option<String>,
    },

    /// Serves the tenant listing endpoint (GET /api/tenants)
    ServeTenants {
        #[arg(long, default_value = "127.0.0.1:8787")]
        listen: SocketAddr,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_enrich() -> Result<()> {
        let args = Cli::parse_from([
            "veda-ingest",
            "enrich",
            "--schema",
            "schema.json",
            "--field",
            "tenant",
        ]);
        match args.command {
            Commands::Enrich {
                schema,
                field,
                tenants_url,
            } => {
                assert_eq!(schema.to_string_lossy(), "schema.json");
                assert_eq!(field, Some(TenantField::Tenant));
                assert_eq!(tenants_url, None);
                Ok(())
            }
            _ => bail!("Expected Enrich command"),
        }
    }

    #[test]
    fn test_cli_parse_truncate_default_budget() -> Result<()> {
        let args = Cli::parse_from(["veda-ingest", "truncate", "some text"]);
        match args.command {
            Commands::Truncate { text, max_words } => {
                assert_eq!(text, "some text");
                assert_eq!(max_words, 20);
                Ok(())
            }
            _ => bail!("Expected Truncate command"),
        }
    }

    #[test]
    fn test_cli_parse_global_config() -> Result<()> {
        let args = Cli::parse_from(["veda-ingest", "profiles", "--config", "/tmp/x.yaml"]);
        assert_eq!(
            args.config.map(|p| p.to_string_lossy().into_owned()),
            Some("/tmp/x.yaml".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_cli_parse_serve_default_listen() -> Result<()> {
        let args = Cli::parse_from(["veda-ingest", "serve-tenants"]);
        match args.command {
            Commands::ServeTenants { listen } => {
                assert_eq!(listen.to_string(), "127.0.0.1:8787");
                Ok(())
            }
            _ => bail!("Expected ServeTenants command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_field() {
        assert!(
            Cli::try_parse_from(["veda-ingest", "enrich", "--schema", "s.json", "--field", "owner"])
                .is_err()
        );
    }
}
