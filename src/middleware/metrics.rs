//! Metrics Middleware
//!
//! Instruments every request with the process-wide metrics sink.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::metrics::Metrics;

/// Middleware that records request volume, concurrency, and latency.
///
/// On entry it increments the total-request counter and the in-flight
/// gauge; a drop guard decrements the gauge and observes elapsed wall-clock
/// seconds into the latency histogram on every exit path. Composed
/// outermost so the histogram measures end-to-end latency including all
/// inner middleware.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    state.metrics.total_requests.inc();
    state.metrics.concurrent_requests.inc();
    let _guard = InFlightGuard {
        metrics: Arc::clone(&state.metrics),
        start: Instant::now(),
    };

    next.run(req).await
}

/// Settles the in-flight gauge and the latency histogram when the request
/// future completes, whether it returned normally or unwound.
struct InFlightGuard {
    metrics: Arc<Metrics>,
    start: Instant,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.metrics.concurrent_requests.dec();
        self.metrics
            .request_latency
            .observe(self.start.elapsed().as_secs_f64());
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use axum::{
        body::Body, http::Request as HttpRequest, middleware::from_fn_with_state, routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::store::MemoryStore;

    fn instrumented_app() -> (Router, AppState) {
        let state = AppState::new(Arc::new(MemoryStore::new()), Arc::new(Metrics::new().unwrap()));
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(from_fn_with_state(state.clone(), metrics_middleware))
            .with_state(state.clone());
        (app, state)
    }

    #[tokio::test]
    async fn test_request_updates_counters() {
        let (app, state) = instrumented_app();

        app.oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(state.metrics.total_requests.get(), 1);
        assert_eq!(state.metrics.concurrent_requests.get(), 0);
        assert_eq!(state.metrics.request_latency.get_sample_count(), 1);
    }

    #[tokio::test]
    async fn test_multiple_requests_accumulate() {
        let (app, state) = instrumented_app();

        for _ in 0..5 {
            app.clone()
                .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
        }

        assert_eq!(state.metrics.total_requests.get(), 5);
        assert_eq!(state.metrics.concurrent_requests.get(), 0);
        assert_eq!(state.metrics.request_latency.get_sample_count(), 5);
    }
}
