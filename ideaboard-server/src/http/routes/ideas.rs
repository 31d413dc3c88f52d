//! Idea endpoints
//!
//! Each handler makes exactly one store call. Decode and validation
//! failures return before the store is touched.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::{ApiError, IdeaOp};
use crate::http::extractors::{IdeaId, ValidJson};
use crate::http::server::AppState;
use crate::models::{CreateIdeaRequest, Idea, IdeaDraft, UpdateIdeaRequest};

/// POST /api/ideas - create an idea
async fn create_idea(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<Idea>), ApiError> {
    let draft = IdeaDraft::try_from(req)?;
    let idea = state
        .store
        .create(draft)
        .await
        .map_err(|e| ApiError::from_store(IdeaOp::Create, e))?;

    tracing::info!(id = %idea.id, "idea created");
    Ok((StatusCode::CREATED, Json(idea)))
}

/// GET /api/ideas - list ideas, newest first
async fn list_ideas(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Idea>>, ApiError> {
    let ideas = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_store(IdeaOp::List, e))?;

    Ok(Json(ideas))
}

/// GET /api/ideas/{id} - get a single idea
async fn get_idea(
    State(state): State<Arc<AppState>>,
    IdeaId(id): IdeaId,
) -> Result<Json<Idea>, ApiError> {
    let idea = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::from_store(IdeaOp::Get, e))?;

    Ok(Json(idea))
}

/// PUT /api/ideas/{id} - replace title and description
async fn update_idea(
    State(state): State<Arc<AppState>>,
    IdeaId(id): IdeaId,
    ValidJson(req): ValidJson<UpdateIdeaRequest>,
) -> Result<Json<Idea>, ApiError> {
    let draft = IdeaDraft::try_from(req)?;
    let idea = state
        .store
        .update(id, draft)
        .await
        .map_err(|e| ApiError::from_store(IdeaOp::Update, e))?;

    tracing::info!(%id, "idea updated");
    Ok(Json(idea))
}

/// DELETE /api/ideas/{id}
async fn delete_idea(
    State(state): State<Arc<AppState>>,
    IdeaId(id): IdeaId,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::from_store(IdeaOp::Delete, e))?;

    tracing::info!(%id, "idea deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Idea routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ideas", get(list_ideas).post(create_idea))
        .route(
            "/api/ideas/{id}",
            get(get_idea).put(update_idea).delete(delete_idea),
        )
}
