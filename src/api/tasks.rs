//! REST endpoints for the task collection.
//!
//! Contracts the browser UI depends on and which must stay put:
//! - every response, success or failure, is JSON; errors are `400 {error}`
//! - creation answers 200, not 201
//! - PATCH/DELETE against an unknown id answer 200 with `changes: 0`
//! - `startDate`/`endDate` on GET are accepted and ignored; filtering is
//!   client-side (see `libs::filter`)

use super::{ApiError, AppState};
use crate::libs::task::{NewTask, Task, TaskPatch};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Envelope for list and create responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub message: &'static str,
    pub data: T,
}

/// Envelope for update and delete responses.
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub message: &'static str,
    pub changes: usize,
}

/// Date-range parameters the UI sends on history searches.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// GET /api/tasks
pub async fn list(
    State(state): State<AppState>,
    // Parsed for compatibility; the range is applied client-side.
    Query(_history): Query<HistoryQuery>,
) -> Result<Json<DataResponse<Vec<Task>>>, ApiError> {
    let mut guard = state.tasks.lock();
    let store = guard.as_mut().ok_or(ApiError::Unavailable)?;
    let data = store.fetch()?;

    Ok(Json(DataResponse { message: "success", data }))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<DataResponse<Task>>, ApiError> {
    let Json(new) = body.map_err(|rejection| ApiError::Store(rejection.body_text()))?;

    let mut guard = state.tasks.lock();
    let store = guard.as_mut().ok_or(ApiError::Unavailable)?;
    let task = store.insert(&new)?;

    Ok(Json(DataResponse { message: "success", data: task }))
}

/// PATCH /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let Json(patch) = body.map_err(|rejection| ApiError::Store(rejection.body_text()))?;
    if patch.is_empty() {
        return Err(ApiError::EmptyUpdate);
    }

    let mut guard = state.tasks.lock();
    let store = guard.as_mut().ok_or(ApiError::Unavailable)?;
    let changes = store.update(&id, &patch)?;

    Ok(Json(ChangesResponse { message: "success", changes }))
}

/// DELETE /api/tasks/{id}
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ChangesResponse>, ApiError> {
    let mut guard = state.tasks.lock();
    let store = guard.as_mut().ok_or(ApiError::Unavailable)?;
    let changes = store.delete(&id)?;

    Ok(Json(ChangesResponse { message: "deleted", changes }))
}
