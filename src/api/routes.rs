//! API Routes
//!
//! Configures the Axum router and composes the middleware pipeline. The
//! pipeline is assembled once at startup and fixed for the lifetime of the
//! process.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{any, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{
    delete_item, get_item, item_redirect, method_not_allowed, metrics_handler, set_item, AppState,
};
use crate::middleware::{logging_middleware, metrics_middleware, request_id_middleware};

/// Creates the main router with all endpoints and middleware configured.
///
/// Middleware order (outermost to innermost) is metrics, request-id,
/// logging, handler. Axum applies the last `.layer()` call outermost, so
/// the layers are listed innermost-first below. `/metrics` is routed after
/// the layers so a scrape does not count itself.
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/item",
            get(get_item)
                .post(set_item)
                .delete(delete_item)
                .fallback(method_not_allowed),
        )
        .route("/item/*rest", any(item_redirect))
        .layer(cors)
        .layer(from_fn(logging_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn_with_state(state.clone(), metrics_middleware))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
