//! HTTP front-end for Ghostream
//!
//! Serves the home and viewer pages, the stream authentication gate, and
//! Prometheus metrics.

pub mod metrics;
pub mod routes;
pub mod server;
pub mod templates;

pub use metrics::MetricsRecorder;
pub use server::WebServer;
