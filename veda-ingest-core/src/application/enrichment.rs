// veda-ingest-core/src/application/enrichment.rs
//
// USE CASE: constrain a form schema's tenant choices to the tenants the directory returns.

use miette::Diagnostic;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::domain::schema::{TenantField, with_tenant_enum};
use crate::ports::tenant_source::{TenantSource, TenantSourceError};

#[derive(Error, Debug, Diagnostic)]
pub enum EnrichmentError {
    #[error("Tenant enrichment failed: {0}")]
    #[diagnostic(
        code(veda::enrichment::fetch),
        help("The form falls back to the base schema with a free-text tenant field.")
    )]
    Fetch(#[from] TenantSourceError),
}

/// Schema plus loading flag, as a form renderer consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSchema {
    pub schema: Value,
    pub is_loading: bool,
}

/// Fetch then transform. No fallback, no state: the caller sees the error.
#[instrument(skip(base, source))]
pub async fn enrich_schema(
    base: &Value,
    field: TenantField,
    source: &dyn TenantSource,
) -> Result<Value, EnrichmentError> {
    let tenants = source.fetch_tenants().await?;
    debug!(count = tenants.len(), "Applying tenant enum");
    Ok(with_tenant_enum(base, field, &tenants))
}

/// Like [`enrich_schema`], but a failed fetch degrades to the unmodified base schema.
pub async fn enrich_schema_with_tenants(
    base: &Value,
    field: TenantField,
    source: &dyn TenantSource,
) -> EnrichedSchema {
    let schema = match enrich_schema(base, field, source).await {
        Ok(schema) => schema,
        Err(e) => {
            warn!(error = %e, %field, "Using base schema without tenant choices");
            base.clone()
        }
    };
    EnrichedSchema {
        schema,
        is_loading: false,
    }
}

/// Observable state of a [`TenantSchemaEnricher`].
#[derive(Debug, Clone)]
pub struct SchemaState {
    pub schema: Arc<Value>,
    pub is_loading: bool,
}

impl SchemaState {
    pub fn to_enriched(&self) -> EnrichedSchema {
        EnrichedSchema {
            schema: (*self.schema).clone(),
            is_loading: self.is_loading,
        }
    }
}

struct Inputs {
    base: Arc<Value>,
    source: Arc<dyn TenantSource>,
}

/// Keeps an enriched schema current for a form.
///
/// Runs are ordered by a generation counter: only the most recently started run
/// may commit, so a slow earlier fetch can never overwrite a newer result.
pub struct TenantSchemaEnricher {
    field: TenantField,
    inputs: Mutex<Inputs>,
    generation: AtomicU64,
    state: watch::Sender<SchemaState>,
}

impl TenantSchemaEnricher {
    /// Starts in the loading state with the base schema. Call [`refresh`](Self::refresh) to fetch.
    pub fn new(base: Arc<Value>, source: Arc<dyn TenantSource>, field: TenantField) -> Self {
        let (state, _) = watch::channel(SchemaState {
            schema: base.clone(),
            is_loading: true,
        });
        Self {
            field,
            inputs: Mutex::new(Inputs { base, source }),
            generation: AtomicU64::new(0),
            state,
        }
    }

    pub fn field(&self) -> TenantField {
        self.field
    }

    pub fn current(&self) -> SchemaState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SchemaState> {
        self.state.subscribe()
    }

    /// Re-runs the pipeline with the current inputs.
    pub async fn refresh(&self) -> SchemaState {
        let (base, source) = {
            let inputs = self.inputs.lock().await;
            (inputs.base.clone(), inputs.source.clone())
        };
        self.run(base, source).await
    }

    /// Fire-and-forget [`refresh`](Self::refresh) on the runtime.
    pub fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<SchemaState> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.refresh().await })
    }

    /// Swaps inputs and re-runs, but only when the base schema or the source is a
    /// different object than before. Returns `None` when nothing changed.
    pub async fn set_inputs(
        &self,
        base: Arc<Value>,
        source: Arc<dyn TenantSource>,
    ) -> Option<SchemaState> {
        {
            let mut inputs = self.inputs.lock().await;
            if Arc::ptr_eq(&inputs.base, &base) && Arc::ptr_eq(&inputs.source, &source) {
                return None;
            }
            inputs.base = base.clone();
            inputs.source = source.clone();
        }
        Some(self.run(base, source).await)
    }

    async fn run(&self, base: Arc<Value>, source: Arc<dyn TenantSource>) -> SchemaState {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.commit(token, base.clone(), true);

        let schema = match enrich_schema(&base, self.field, source.as_ref()).await {
            Ok(schema) => Arc::new(schema),
            Err(e) => {
                warn!(error = %e, field = %self.field, token, "Using base schema without tenant choices");
                base
            }
        };

        if self.commit(token, schema, false) {
            info!(field = %self.field, token, "Tenant schema updated");
        } else {
            debug!(token, "Discarding superseded enrichment result");
        }

        self.current()
    }

    fn commit(&self, token: u64, schema: Arc<Value>, is_loading: bool) -> bool {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != token {
                return false;
            }
            *state = SchemaState { schema, is_loading };
            true
        })
    }
}
