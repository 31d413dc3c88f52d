//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::ApiError;

/// JSON body extractor whose rejection is an `ApiError::InvalidBody`.
///
/// Covers malformed JSON, missing fields, wrong field types and a missing
/// or wrong content type.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::InvalidBody
        })?;

        Ok(Self(value))
    }
}

/// Extract an idea id from the path.
///
/// A value that is not a UUID cannot name a stored idea, so it is
/// answered the same way as an unknown id.
pub struct IdeaId(pub Uuid);

impl<S> FromRequestParts<S> for IdeaId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let uuid = Uuid::parse_str(&id).map_err(|_| {
            tracing::debug!(id = %id, "path id is not a UUID");
            ApiError::NotFound
        })?;

        Ok(Self(uuid))
    }
}
