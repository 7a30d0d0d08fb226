//! Middleware Module
//!
//! The request-pipeline stages wrapped around the handlers. Each stage
//! observes or annotates the request without owning business logic and
//! forwards to the next stage exactly once.
//!
//! Composition order (outermost to innermost) is fixed at startup in
//! `api::routes`: metrics, then request-id, then logging, then the handler.
//! Metrics wraps outermost so it measures true end-to-end latency;
//! request-id runs before logging so every log line carries the identifier.

pub mod logging;
pub mod metrics;
pub mod request_id;

pub use logging::{logging_middleware, RequestContext};
pub use metrics::metrics_middleware;
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
