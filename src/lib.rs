//! KV Server - A minimal networked key-value store
//!
//! An in-memory store behind a coarse lock, fronted by an HTTP API and
//! wrapped in a fixed middleware pipeline (metrics, request identity,
//! structured logging).

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use metrics::Metrics;
pub use store::{MemoryStore, Store};
