//! Prometheus metrics for Ghostream
//!
//! Exposes metrics at the `/metrics` endpoint in Prometheus format.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Metric names
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "ghostream_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "ghostream_http_request_duration_seconds";

    // Front-end metrics
    pub const WEB_VIEWER_SERVED_TOTAL: &str = "ghostream_web_viewer_served_total";
    pub const AUTH_ATTEMPTS_TOTAL: &str = "ghostream_auth_attempts_total";

    // System metrics
    pub const UPTIME_SECONDS: &str = "ghostream_uptime_seconds";
    pub const INFO: &str = "ghostream_info";
}

/// Metrics recorder
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
    start_time: Instant,
}

impl MetricsRecorder {
    /// Install the global Prometheus recorder. Called once at startup.
    pub fn new() -> Self {
        let builder = PrometheusBuilder::new();
        let handle = builder
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        gauge!(names::INFO, "version" => ghostream_core::VERSION).set(1.0);

        Self {
            handle,
            start_time: Instant::now(),
        }
    }

    /// Recorder whose handle is not installed globally
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        Self {
            handle,
            start_time: Instant::now(),
        }
    }

    /// Get metrics output in Prometheus format
    pub fn render(&self) -> String {
        gauge!(names::UPTIME_SECONDS).set(self.start_time.elapsed().as_secs_f64());

        self.handle.render()
    }

    /// Record an HTTP request
    pub fn record_http_request(&self, method: &str, status: u16, duration_secs: f64) {
        let status_class = format!("{}xx", status / 100);

        counter!(
            names::HTTP_REQUESTS_TOTAL,
            "method" => method.to_string(),
            "status" => status.to_string(),
            "status_class" => status_class
        )
        .increment(1);

        histogram!(
            names::HTTP_REQUEST_DURATION_SECONDS,
            "method" => method.to_string()
        )
        .record(duration_secs);
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Count a served home or viewer page
pub fn record_viewer_served() {
    counter!(names::WEB_VIEWER_SERVED_TOTAL).increment(1);
}

/// Count an authentication attempt by outcome
pub fn record_auth_attempt(outcome: &'static str) {
    counter!(names::AUTH_ATTEMPTS_TOTAL, "outcome" => outcome).increment(1);
}

/// Axum middleware for recording HTTP metrics
pub async fn metrics_middleware(
    State(metrics): State<Arc<MetricsRecorder>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    metrics.record_http_request(&method, status, duration);

    debug!(
        method = %method,
        path = %path,
        status = %status,
        duration_ms = %(duration * 1000.0),
        "Request completed"
    );

    response
}

/// Handler for /metrics endpoint
pub async fn metrics_handler(State(metrics): State<Arc<MetricsRecorder>>) -> impl IntoResponse {
    let output = metrics.render();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        output,
    )
}
