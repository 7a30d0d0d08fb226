//! API Handlers
//!
//! HTTP request handlers for each key-value server endpoint. Each verb maps
//! to exactly one store operation; store errors map to exactly one response
//! via the `KvError` status mapping.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{KvError, Result};
use crate::metrics::Metrics;
use crate::middleware::RequestContext;
use crate::models::{DeleteRequest, ErrorResponse, MessageResponse, SetRequest, ValueResponse};
use crate::store::{MemoryStore, Store};

/// Application state shared across all handlers.
///
/// Handlers depend on the `Store` capability, never on a concrete backend.
#[derive(Clone)]
pub struct AppState {
    /// The key-value store behind its capability trait
    pub store: Arc<dyn Store>,
    /// Process-wide metrics sink
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Creates a new AppState from a store backend and a metrics sink.
    pub fn new(store: Arc<dyn Store>, metrics: Arc<Metrics>) -> Self {
        Self { store, metrics }
    }

    /// Creates an AppState backed by a fresh in-memory store.
    pub fn with_memory_store() -> Result<Self> {
        let metrics = Metrics::new()?;
        Ok(Self::new(Arc::new(MemoryStore::new()), Arc::new(metrics)))
    }
}

/// Query parameters for GET /item
#[derive(Debug, Deserialize)]
pub struct GetParams {
    key: Option<String>,
}

/// Handler for GET /item?key=<string>
///
/// Retrieves the value for the given key. 400 when the query parameter is
/// missing, 404 when the store reports the key absent.
pub async fn get_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(params): Query<GetParams>,
) -> Result<Json<ValueResponse>> {
    let key = match params.key {
        Some(key) if !key.is_empty() => key,
        _ => {
            return Err(KvError::InvalidInput(
                "'key' query parameter is required".to_string(),
            ))
        }
    };

    let value = state.store.get(&key)?;
    ctx.span.in_scope(|| debug!(%key, "get successful"));
    Ok(Json(ValueResponse::new(value)))
}

/// Handler for POST /item
///
/// Decodes a `{key, value}` body and stores the pair. 202 on success, 400
/// on a malformed body or missing fields.
pub async fn set_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(req) =
        payload.map_err(|_| KvError::InvalidInput("invalid json body".to_string()))?;
    if let Some(error_msg) = req.validate() {
        return Err(KvError::InvalidInput(error_msg));
    }

    state.store.set(req.key.clone(), req.value)?;
    ctx.span.in_scope(|| debug!(key = %req.key, "set successful"));
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new("set successful")),
    ))
}

/// Handler for DELETE /item
///
/// Decodes a `{key}` body and removes the key. 400 on a malformed body or
/// missing key field, 404 when the key is absent.
pub async fn delete_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: std::result::Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) =
        payload.map_err(|_| KvError::InvalidInput("invalid json body".to_string()))?;
    if let Some(error_msg) = req.validate() {
        return Err(KvError::InvalidInput(error_msg));
    }

    state.store.delete(&req.key)?;
    ctx.span.in_scope(|| debug!(key = %req.key, "delete successful"));
    Ok(Json(MessageResponse::new("delete successful")))
}

/// Handler for GET /metrics
///
/// Renders the metrics sink in Prometheus text exposition format.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response> {
    let text = state.metrics.render()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        text,
    )
        .into_response())
}

/// Fallback for unsupported verbs on /item
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("invalid request method")),
    )
}

/// Handler redirecting any path under /item/ back to /item
pub async fn item_redirect() -> Redirect {
    Redirect::temporary("/item")
}
