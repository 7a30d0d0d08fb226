//! Metrics Module
//!
//! Process-wide request metrics: a total-request counter, an in-flight
//! gauge, and a latency histogram, registered on a process-owned registry
//! and rendered in Prometheus text exposition format.

use prometheus::{Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

// == Metrics ==
/// The metrics sink shared by every request.
///
/// Each cell is an independently atomically-updated value; concurrent
/// increments and observations from simultaneous requests need no external
/// locking. Lifecycle is the process lifetime.
pub struct Metrics {
    /// Total number of requests received across all endpoints
    pub total_requests: IntCounter,
    /// Number of concurrently served requests across all endpoints
    pub concurrent_requests: IntGauge,
    /// Request latency in seconds across all endpoints
    pub request_latency: Histogram,
    registry: Registry,
}

impl Metrics {
    // == Constructor ==
    /// Creates the metrics cells and registers them on a fresh registry.
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let total_requests = IntCounter::new(
            "total_requests",
            "total number of requests received across all endpoints",
        )?;
        let concurrent_requests = IntGauge::new(
            "concurrent_requests",
            "number of concurrently served requests across all endpoints",
        )?;
        let request_latency = Histogram::with_opts(HistogramOpts::new(
            "request_latency",
            "request latency in seconds across all endpoints",
        ))?;

        registry.register(Box::new(total_requests.clone()))?;
        registry.register(Box::new(concurrent_requests.clone()))?;
        registry.register(Box::new(request_latency.clone()))?;

        Ok(Self {
            total_requests,
            concurrent_requests,
            request_latency,
            registry,
        })
    }

    // == Render ==
    /// Renders all registered metrics in Prometheus text exposition format.
    pub fn render(&self) -> prometheus::Result<String> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
