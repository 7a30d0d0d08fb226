//! Request Identity Middleware
//!
//! Stamps a correlation identifier onto every inbound request.

use axum::{
    extract::Request,
    http::{header::HeaderValue, HeaderName},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the per-request correlation identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that ensures every request carries an `x-request-id` header.
///
/// A request arriving without the header (or with an empty value) gets a
/// freshly generated UUIDv4 attached before it is forwarded. A request that
/// already carries one passes through unchanged. The identifier is not
/// echoed back in the response.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let has_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.is_empty());

    if !has_id {
        let id = Uuid::new_v4().to_string();
        // A freshly formatted UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&id) {
            req.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
    }

    next.run(req).await
}
