/// Worker management REST API endpoints
///
/// Provides list, lookup, create, update, delete, and search over worker records.
/// Deletes renumber the remaining rows and answer with the refreshed list.

use crate::{
    api::error::ApiError,
    registry::{Worker, WorkerFields, WorkerStorage},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Worker storage for persistence
    pub storage: WorkerStorage,
}

/// Response for worker deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    /// Full list after renumbering
    pub workers: Vec<Worker>,
}

/// Query string of the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Create worker management routes
///
/// `/workers/search` is a static segment and takes precedence over `/workers/{id}`.
pub fn create_worker_routes() -> Router<AppState> {
    Router::new()
        .route("/workers", get(list_workers).post(create_worker))
        .route("/workers/search", get(search_workers))
        .route(
            "/workers/{id}",
            get(get_worker).put(update_worker).delete(delete_worker),
        )
}

/// List all workers
///
/// GET /workers
async fn list_workers(State(state): State<AppState>) -> Result<Json<Vec<Worker>>, ApiError> {
    let workers = state.storage.list_workers().await?;
    Ok(Json(workers))
}

/// Get a specific worker by id
///
/// GET /workers/{id}
async fn get_worker(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Worker>, ApiError> {
    let Path(id) = path?;
    match state.storage.get_worker(id).await? {
        Some(worker) => Ok(Json(worker)),
        None => Err(ApiError::NotFound),
    }
}

/// Create a new worker at the end of the id sequence
///
/// POST /workers
/// Body: { "first_name": "...", "last_name": "...", "address": "...", "phone_number": "...", "worker_position": "..." }
async fn create_worker(
    State(state): State<AppState>,
    payload: Result<Json<WorkerFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Worker>), ApiError> {
    let Json(fields) = payload?;
    let worker = state.storage.create_worker(&fields).await?;

    tracing::info!("Created worker {} ({} {})", worker.id, worker.first_name, worker.last_name);

    Ok((StatusCode::CREATED, Json(worker)))
}

/// Update an existing worker
///
/// PUT /workers/{id}
/// Body: same fields as create; the id in the path is never changed
async fn update_worker(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<WorkerFields>, JsonRejection>,
) -> Result<Json<Worker>, ApiError> {
    let Path(id) = path?;
    let Json(fields) = payload?;
    let worker = state.storage.update_worker(id, &fields).await?;

    tracing::info!("Updated worker {}", worker.id);

    Ok(Json(worker))
}

/// Delete a worker and renumber the rest
///
/// DELETE /workers/{id}
/// Returns: { "message": "Worker deleted successfully", "workers": [...] }
async fn delete_worker(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = path?;
    let workers = state.storage.delete_worker(id).await?;

    tracing::info!("Deleted worker {} ({} remaining)", id, workers.len());

    Ok(Json(DeleteResponse {
        message: "Worker deleted successfully".to_string(),
        workers,
    }))
}

/// Search workers by substring across all text fields
///
/// GET /workers/search?searchTerm=...
/// A blank or missing term returns every worker.
async fn search_workers(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Worker>>, ApiError> {
    let Query(query) = query?;
    let term = query.search_term.unwrap_or_default();
    tracing::debug!("Searching workers for {:?}", term);

    let workers = state.storage.search_workers(&term).await?;
    Ok(Json(workers))
}
