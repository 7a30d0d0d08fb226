//! API Module
//!
//! HTTP handlers and routing for the key-value server.
//!
//! # Endpoints
//! - `GET /item?key=<string>` - Retrieve a value by key
//! - `POST /item` - Store a key-value pair
//! - `DELETE /item` - Delete a key
//! - `GET /metrics` - Prometheus text exposition of the metrics sink

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
