//! Front-end routes
//!
//! Two presentational views and the stream authentication gate used by
//! the RTMP proxy on stream start.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use ghostream_core::Error;
use serde::Deserialize;
use tracing::{info, warn};

use crate::metrics::{record_auth_attempt, record_viewer_served};
use crate::server::AppState;
use crate::templates;

/// Welcome page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    record_viewer_served();
    Html(templates::render_index(&state.config.site))
}

/// Viewer page for the stream matching this path
pub async fn viewer(State(state): State<AppState>, Path(path): Path<String>) -> Html<String> {
    record_viewer_served();
    Html(templates::render_viewer(&state.config.site, &path))
}

// No Debug on purpose: the struct carries the publisher's secret
#[derive(Deserialize)]
pub struct AuthForm {
    name: Option<String>,
    pass: Option<String>,
}

/// Authentication on stream start
pub async fn authenticate(
    State(state): State<AppState>,
    Form(form): Form<AuthForm>,
) -> Response {
    // A stream needs a name and a password
    let (name, pass) = match (form.name, form.pass) {
        (Some(name), Some(pass)) => (name, pass),
        _ => {
            // After a successful login the proxy re-announces the stream
            // with "?pass=xxx" stripped from the URL. That re-announce
            // lands here without credentials and must stay a 400, never a
            // 401: the proxy decides on its own whether the stream
            // continues.
            record_auth_attempt("malformed");
            return (
                StatusCode::BAD_REQUEST,
                Error::MalformedRequest.to_string(),
            )
                .into_response();
        }
    };

    match state.auth.login(&name, &pass).await {
        Ok(()) => {
            info!("{} logged in successfully", name);
            record_auth_attempt("success");

            // Redirect to the ingest URL without the password, so the
            // second announce never carries the secret
            let location = format!("{}/{}", state.config.stream.ingest_base, name);
            Response::builder()
                .status(StatusCode::FOUND)
                .header(header::LOCATION, location)
                .body(Body::empty())
                .unwrap()
        }
        Err(_) => {
            warn!("{} failed to log in", name);
            record_auth_attempt("failure");
            (
                StatusCode::UNAUTHORIZED,
                Error::InvalidCredentials.to_string(),
            )
                .into_response()
        }
    }
}
