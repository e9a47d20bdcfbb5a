// veda-ingest-core/src/infrastructure/tenants.rs

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::infrastructure::config::Settings;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::tenant_source::{TenantSource, TenantSourceError};

/// Reads the tenant directory from an HTTP endpoint returning a JSON array of strings.
#[derive(Clone, Debug)]
pub struct HttpTenantSource {
    client: Client,
    url: String,
}

impl HttpTenantSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TenantSource for HttpTenantSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_tenants(&self) -> Result<Vec<String>, TenantSourceError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string());
            return Err(TenantSourceError::Status(reason));
        }

        let body = resp.bytes().await?;
        let tenants: Vec<String> = serde_json::from_slice(&body)?;
        debug!(count = tenants.len(), "Fetched tenants");
        Ok(tenants)
    }
}

/// Fixed tenant list. Backs the local listing endpoint and offline runs.
#[derive(Clone, Debug, Default)]
pub struct StaticTenantSource {
    tenants: Vec<String>,
}

impl StaticTenantSource {
    pub fn new(tenants: Vec<String>) -> Self {
        Self { tenants }
    }

    pub fn tenants(&self) -> &[String] {
        &self.tenants
    }
}

#[async_trait]
impl TenantSource for StaticTenantSource {
    async fn fetch_tenants(&self) -> Result<Vec<String>, TenantSourceError> {
        Ok(self.tenants.clone())
    }
}

/// Picks the source the settings describe: HTTP when a URL is set, the static list otherwise.
pub fn tenant_source_from_settings(
    settings: &Settings,
) -> Result<Box<dyn TenantSource>, InfrastructureError> {
    match &settings.tenants_url {
        Some(url) => Ok(Box::new(HttpTenantSource::new(
            url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )?)),
        None => Ok(Box::new(StaticTenantSource::new(
            settings.fallback_tenants.clone(),
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    async fn serve(app: Router) -> anyhow::Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{}", addr))
    }

    fn source(base: &str, path: &str) -> HttpTenantSource {
        HttpTenantSource::new(format!("{}{}", base, path), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_http_source_parses_array() -> anyhow::Result<()> {
        let app = Router::new().route(
            "/api/tenants",
            get(|| async { axum::Json(vec!["tenant-A", "tenant-B", "tenant-A"]) }),
        );
        let base = serve(app).await?;

        let tenants = source(&base, "/api/tenants").fetch_tenants().await?;
        assert_eq!(tenants, vec!["tenant-A", "tenant-B", "tenant-A"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_http_source_reports_status_text() -> anyhow::Result<()> {
        let app = Router::new().route(
            "/api/tenants",
            get(|| async { (StatusCode::FORBIDDEN, "nope") }),
        );
        let base = serve(app).await?;

        let err = source(&base, "/api/tenants").fetch_tenants().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch tenants: Forbidden");
        Ok(())
    }

    #[tokio::test]
    async fn test_http_source_rejects_non_string_payload() -> anyhow::Result<()> {
        let app = Router::new().route(
            "/api/tenants",
            get(|| async { axum::Json(serde_json::json!({ "tenants": [] })) }),
        );
        let base = serve(app).await?;

        let err = source(&base, "/api/tenants").fetch_tenants().await.unwrap_err();
        assert!(matches!(err, TenantSourceError::Decode(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_http_source_unreachable() {
        // Port 9 (discard) on loopback is closed in any sane test environment.
        let err = source("http://127.0.0.1:9", "/api/tenants")
            .fetch_tenants()
            .await
            .unwrap_err();
        assert!(matches!(err, TenantSourceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_static_source_and_settings_selection() -> anyhow::Result<()> {
        let settings = Settings {
            fallback_tenants: vec!["ghg".into(), "eic".into()],
            ..Settings::default()
        };
        let tenants = tenant_source_from_settings(&settings)?.fetch_tenants().await?;
        assert_eq!(tenants, vec!["ghg", "eic"]);

        let settings = Settings {
            tenants_url: Some("http://127.0.0.1:9/api/tenants".into()),
            ..Settings::default()
        };
        assert!(tenant_source_from_settings(&settings)?.fetch_tenants().await.is_err());
        Ok(())
    }
}
