//! API error types with IntoResponse
//!
//! Every failure renders as `{"error": "<message>"}`. Store failures are
//! logged with their cause; the client only sees a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// The idea operation a handler was performing, for 500 messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaOp {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl IdeaOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Failed to create idea",
            Self::List => "Failed to fetch ideas",
            Self::Get => "Failed to fetch idea",
            Self::Update => "Failed to update idea",
            Self::Delete => "Failed to delete idea",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded into the request shape (400)
    InvalidBody,

    /// Decoded body failed validation (400)
    Validation(ValidationError),

    /// Uniqueness violation (409)
    Conflict,

    /// No idea with the requested id (404)
    NotFound,

    /// No route matched (404)
    RouteNotFound,

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Store failure (500, logged)
    Unavailable { op: IdeaOp, cause: String },
}

impl ApiError {
    /// Classify a store error for the given operation.
    pub fn from_store(op: IdeaOp, err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => Self::Conflict,
            StoreError::NotFound { .. } => Self::NotFound,
            StoreError::Unavailable(cause) => Self::Unavailable { op, cause },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidBody => "Invalid request body".to_owned(),
            Self::Validation(e) => e.to_string(),
            Self::Conflict => "Idea already exists".to_owned(),
            Self::NotFound => "Idea not found".to_owned(),
            Self::RouteNotFound => "Not found".to_owned(),
            Self::MethodNotAllowed => "Method not allowed".to_owned(),
            Self::Unavailable { op, .. } => op.failure_message().to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Unavailable { op, cause } = &self {
            // Log the actual error, return generic message
            tracing::error!(?op, %cause, "store error");
        }

        let status = self.status();
        let body = json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
