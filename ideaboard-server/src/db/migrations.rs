//! Schema creation for the ideas table
//!
//! Idempotent: safe to run on every startup.

use sqlx::PgPool;

/// Create the `ideas` table and its ordering index if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running ideaboard migrations...");

    // gen_random_uuid() is built in from PostgreSQL 13
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ideas (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_ideas_created ON ideas(created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Ideaboard migrations complete");
    Ok(())
}
