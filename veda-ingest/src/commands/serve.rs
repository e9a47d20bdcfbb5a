// veda-ingest/src/commands/serve.rs
//
// USE CASE: Local tenant directory for the form's tenant fetch.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const TENANTS_ROUTE: &str = "/api/tenants";

pub fn router(tenants: Vec<String>) -> Router {
    Router::new()
        .route(TENANTS_ROUTE, get(list_tenants))
        .with_state(Arc::new(tenants))
}

async fn list_tenants(State(tenants): State<Arc<Vec<String>>>) -> Json<Vec<String>> {
    Json(tenants.as_ref().clone())
}

pub async fn execute(config: Option<&Path>, listen: SocketAddr) -> anyhow::Result<()> {
    let settings = super::settings(config)?;
    let tenants = settings.fallback_tenants;

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(addr = %listener.local_addr()?, count = tenants.len(), "Serving tenant directory");
    println!("🏢 Tenant directory on http://{}{}", listener.local_addr()?, TENANTS_ROUTE);

    axum::serve(listener, router(tenants)).await?;
    Ok(())
}
