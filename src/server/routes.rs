//! Axum route handlers for the activity roster API.
//!
//! # Routes
//!
//! - `GET    /`                                  — 307 to `/static/index.html`
//! - `GET    /health`                            — `{"status": "ok", ...}`
//! - `GET    /activities`                        — Roster snapshot
//! - `POST   /activities/:activity_name/signup`   — Enroll `?email=`
//! - `DELETE /activities/:activity_name/unregister` — Withdraw `?email=`

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use crate::roster::{Confirmation, Roster, RosterSnapshot};

/// Landing page the root path redirects to.
pub const INDEX_PATH: &str = "/static/index.html";

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The activity roster. Locks are per activity, inside the roster.
    pub roster: Arc<Roster>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(roster: Roster, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            roster: Arc::new(roster),
            static_dir: static_dir.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Roster::seeded(), "static")
    }
}

/// Query pairs of the signup/unregister routes.
///
/// Kept as raw pairs so a repeated `email` key resolves to its last value
/// instead of failing to deserialize.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct EmailQuery(Vec<(String, String)>);

impl EmailQuery {
    /// The last `email` value, if any.
    pub fn email(self) -> Option<String> {
        self.0
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value)
    }
}

/// Success body of the mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Confirmation> for MessageResponse {
    fn from(done: Confirmation) -> Self {
        Self {
            message: done.to_string(),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/activities", get(list_activities_handler))
        .route("/activities/:activity_name/signup", post(signup_handler))
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_handler),
        )
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / — send browsers to the landing page.
async fn root_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// GET /health — liveness probe.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "mergington-activities",
        "activities": state.roster.len(),
    }))
}

/// GET /activities — every activity keyed by name.
async fn list_activities_handler(State(state): State<AppState>) -> Json<RosterSnapshot> {
    Json(state.roster.list_activities())
}

/// POST /activities/:activity_name/signup?email=...
async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_from(path)?;
    let email = email_from(query)?;
    let done = state.roster.enroll(&activity_name, &email)?;
    tracing::info!("{}", done);
    Ok(Json(done.into()))
}

/// DELETE /activities/:activity_name/unregister?email=...
async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_from(path)?;
    let email = email_from(query)?;
    let done = state.roster.withdraw(&activity_name, &email)?;
    tracing::info!("{}", done);
    Ok(Json(done.into()))
}

fn activity_from(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(activity_name) = path.map_err(|r| ApiError::InvalidRequest(r.body_text()))?;
    Ok(activity_name)
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query.map_err(|r| ApiError::InvalidRequest(r.body_text()))?;
    query
        .email()
        .ok_or_else(|| ApiError::InvalidRequest("Missing query parameter `email`".to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
