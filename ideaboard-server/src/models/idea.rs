//! The idea record and its request shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored idea.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/ideas` and `PUT /api/ideas/{id}`.
///
/// Both fields are required; any other keys (such as a client-supplied
/// `id` or `created_at`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIdeaRequest {
    pub title: String,
    pub description: String,
}

/// Updates replace title and description wholesale, so they share the shape.
pub type UpdateIdeaRequest = CreateIdeaRequest;
