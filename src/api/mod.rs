//! HTTP surface of the task service.
//!
//! Assembles the axum router: the JSON task API, the health probe, the
//! optional Google sign-in front door, and the static UI bundle as the
//! fallback for everything else. State is injected into handlers through
//! [`AppState`] rather than globals.
//!
//! Task endpoints are deliberately unauthenticated; the sign-in front door
//! only sets a session cookie.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Sessions;
use crate::msg_info;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod health;
pub mod tasks;

/// Directory the UI bundle is served from.
pub const STATIC_DIR: &str = "public";

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The task store; `None` when the database failed to open at startup,
    /// in which case every task request fails individually.
    pub tasks: Arc<Mutex<Option<Tasks>>>,
    pub config: Arc<Config>,
    /// Session cookie codec, present when `SESSION_SECRET` is configured.
    pub sessions: Option<Sessions>,
    /// Outbound client for the OAuth code exchange.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(tasks: Option<Tasks>, config: Config) -> Self {
        let sessions = config.session.as_ref().map(|session| Sessions::new(&session.secret));
        Self {
            tasks: Arc::new(Mutex::new(tasks)),
            config: Arc::new(config),
            sessions,
            http: reqwest::Client::new(),
        }
    }
}

/// Errors surfaced to API clients.
///
/// Every variant renders as HTTP 400 with an `{error}` body, the one
/// failure shape the UI knows how to display.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No fields to update")]
    EmptyUpdate,
    #[error("database is not available")]
    Unavailable,
    #[error("{0}")]
    Store(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(format!("{:#}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/tasks/{id}", patch(tasks::update).delete(tasks::remove))
        .route("/health", get(health::health));

    if state.config.oauth_ready() {
        router = router.merge(auth::routes());
        msg_info!(Message::OauthEnabled);
    }

    router
        .fallback_service(ServeDir::new(STATIC_DIR))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
