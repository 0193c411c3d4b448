//! Web server implementation

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use ghostream_auth::Backend;
use ghostream_core::{GhostreamConfig, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::info;

use crate::metrics::{metrics_handler, metrics_middleware, MetricsRecorder};
use crate::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GhostreamConfig>,
    pub auth: Arc<dyn Backend>,
    pub metrics: Arc<MetricsRecorder>,
}

impl FromRef<AppState> for Arc<MetricsRecorder> {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}

/// Ghostream web server
pub struct WebServer {
    config: GhostreamConfig,
}

impl WebServer {
    pub fn new(config: GhostreamConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let metrics = Arc::new(MetricsRecorder::new());
        info!("Prometheus metrics initialized");

        let auth = ghostream_auth::new_backend(&self.config.auth, &self.config.ldap)?;

        let addr = self.config.server.listen_address.clone();
        let state = AppState {
            config: Arc::new(self.config),
            auth,
            metrics,
        };

        let app = create_router(state);
        let listener = TcpListener::bind(&addr).await?;

        info!("Ghostream web server listening on http://{}", addr);
        info!("Prometheus metrics at http://{}/metrics", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Build the application router.
///
/// The wildcard viewer route matches last; the gate and the metrics
/// endpoint take precedence on their exact paths.
pub fn create_router(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/app/auth", post(routes::authenticate))
        .route("/", get(routes::index))
        .route("/{*path}", get(routes::viewer))
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(state)
}
