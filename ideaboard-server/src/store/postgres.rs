//! PostgreSQL idea store
//!
//! Each operation is a single statement against the shared pool. The
//! database supplies `id` (`gen_random_uuid()`) and `created_at` (`NOW()`).
//! Lookups by id use `fetch_optional`, so a missing row is reported as
//! `NotFound` directly rather than through a driver error.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{IdeaStore, StoreError};
use crate::models::{Idea, IdeaDraft};

/// SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Map a sqlx error onto the store taxonomy.
///
/// This is the only place that inspects driver error shapes.
pub fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    let code = match &err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    };
    classify_sqlstate(code.as_deref(), err.to_string())
}

fn classify_sqlstate(code: Option<&str>, message: String) -> StoreError {
    match code {
        Some(UNIQUE_VIOLATION) => StoreError::DuplicateKey,
        _ => StoreError::Unavailable(message),
    }
}

/// Idea store backed by the `ideas` table.
#[derive(Debug, Clone)]
pub struct PgIdeaStore {
    pool: PgPool,
}

impl PgIdeaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaStore for PgIdeaStore {
    async fn create(&self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let idea: Idea = sqlx::query_as(
            r#"
            INSERT INTO ideas (title, description)
            VALUES ($1, $2)
            RETURNING id, title, COALESCE(description, '') AS description, created_at
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.description.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        tracing::debug!(id = %idea.id, "idea inserted");
        Ok(idea)
    }

    async fn list(&self) -> Result<Vec<Idea>, StoreError> {
        let ideas: Vec<Idea> = sqlx::query_as(
            r#"
            SELECT id, title, COALESCE(description, '') AS description, created_at
            FROM ideas
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        Ok(ideas)
    }

    async fn get(&self, id: Uuid) -> Result<Idea, StoreError> {
        sqlx::query_as(
            r#"
            SELECT id, title, COALESCE(description, '') AS description, created_at
            FROM ideas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify_sqlx_error)?
        .ok_or(StoreError::NotFound { id })
    }

    async fn update(&self, id: Uuid, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let idea: Idea = sqlx::query_as(
            r#"
            UPDATE ideas
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, title, COALESCE(description, '') AS description, created_at
            "#,
        )
        .bind(id)
        .bind(draft.title.as_str())
        .bind(draft.description.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(classify_sqlx_error)?
        .ok_or(StoreError::NotFound { id })?;

        tracing::debug!(%id, "idea updated");
        Ok(idea)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        tracing::debug!(%id, "idea deleted");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[test]
    fn unique_violation_is_duplicate_key() {
        let err = classify_sqlstate(Some("23505"), "duplicate key value".into());
        assert!(matches!(err, StoreError::DuplicateKey));
    }

    #[test]
    fn other_sqlstates_are_unavailable() {
        // not_null_violation
        let err = classify_sqlstate(Some("23502"), "null value".into());
        assert!(matches!(err, StoreError::Unavailable(msg) if msg == "null value"));
    }

    #[test]
    fn driver_errors_without_code_are_unavailable() {
        assert!(matches!(
            classify_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            classify_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Unavailable(_)
        ));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p ideaboard-server -- --ignored

    async fn test_store() -> PgIdeaStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgIdeaStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let store = test_store().await;
        let created = store
            .create(IdeaDraft::new("pg round trip", "check fields").unwrap())
            .await
            .unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(created, fetched);

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_newest_first() {
        let store = test_store().await;
        let older = store
            .create(IdeaDraft::new("pg older", "first").unwrap())
            .await
            .unwrap();
        let newer = store
            .create(IdeaDraft::new("pg newer", "second").unwrap())
            .await
            .unwrap();

        let ideas = store.list().await.unwrap();
        let pos = |id: Uuid| ideas.iter().position(|i| i.id == id).unwrap();
        assert!(pos(newer.id) < pos(older.id));

        store.delete(older.id).await.unwrap();
        store.delete(newer.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_keeps_created_at() {
        let store = test_store().await;
        let created = store
            .create(IdeaDraft::new("pg update", "before").unwrap())
            .await
            .unwrap();

        let updated = store
            .update(created.id, IdeaDraft::new("pg update", "after").unwrap())
            .await
            .unwrap();
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.description, "after");

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_ids_are_not_found() {
        let store = test_store().await;
        let id = Uuid::new_v4();

        assert!(matches!(store.get(id).await, Err(StoreError::NotFound { .. })));
        assert!(matches!(
            store.update(id, IdeaDraft::new("t", "d").unwrap()).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(store.delete(id).await, Err(StoreError::NotFound { .. })));
    }
}
