//! Logging Middleware
//!
//! Derives a request-scoped tracing span carrying method, path, and the
//! correlation identifier, and makes it available to handlers through
//! request extensions.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::{info, info_span, Span};

use crate::middleware::request_id::REQUEST_ID_HEADER;

// == Request Context ==
/// Per-request metadata created at request entry and discarded at exit.
///
/// Holds the correlation identifier and a span already annotated with
/// method, path, and request id; handler log events emitted inside the span
/// carry all three fields.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation identifier stamped by the request-id middleware
    pub request_id: String,
    /// Request-scoped logging span
    pub span: Span,
}

impl Default for RequestContext {
    /// Fallback context for requests that did not pass through the logging
    /// middleware. Carries an empty identifier and a bare span.
    fn default() -> Self {
        Self {
            request_id: String::new(),
            span: info_span!("request"),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    /// Looks the context up in request extensions, falling back to a
    /// default context when absent. Never fails.
    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}

// == Logging Middleware ==
/// Middleware that attaches a [`RequestContext`] to the request and emits
/// one "received request" log line at entry.
///
/// Must run after the request-id middleware so the span carries the final
/// correlation identifier.
pub async fn logging_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let span = info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    );
    span.in_scope(|| info!("received request"));

    req.extensions_mut().insert(RequestContext { request_id, span });

    next.run(req).await
}
