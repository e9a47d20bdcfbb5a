// veda-ingest/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug veda-ingest enrich ... to see the details.
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Profile { env } => commands::profile::execute(config, env),
        Commands::Profiles => commands::profile::list(),
        Commands::Enrich {
            schema,
            field,
            tenants_url,
        } => commands::enrich::execute(config, schema, field, tenants_url).await,
        Commands::Sanitize { name } => commands::text::sanitize(&name),
        Commands::Truncate { text, max_words } => commands::text::truncate(&text, max_words),
        Commands::Validate { schema, data } => commands::validate::execute(schema, data),
        Commands::Thumbnail { filename, env } => commands::thumbnail::execute(config, &filename, env),
        Commands::ServeTenants { listen } => commands::serve::execute(config, listen).await,
    }
}
