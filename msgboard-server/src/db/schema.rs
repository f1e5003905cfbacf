//! Schema bootstrap for the `messages` table

use sqlx::PgPool;

use super::DbError;

/// Maximum stored length of `messages.author`
pub const AUTHOR_MAX_LEN: usize = 100;

/// DDL for the single relation this service owns.
///
/// `IF NOT EXISTS` keeps this safe to run on every start; an existing table
/// is left untouched.
pub const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id SERIAL PRIMARY KEY,
        author VARCHAR(100),
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Supports the newest-first listing.
pub const CREATE_CREATED_AT_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_messages_created_at
        ON messages (created_at DESC, id DESC)
"#;

/// Advisory lock key held while the DDL runs.
const SCHEMA_LOCK_KEY: i64 = 0x6d73_6762_6f61_7264;

/// Ensure the `messages` table and its index exist.
///
/// Concurrent `CREATE TABLE IF NOT EXISTS` can still collide in the catalog,
/// so processes starting together serialize on an advisory lock.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring messages schema...");

    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_MESSAGES_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_CREATED_AT_INDEX).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("Schema ready");
    Ok(())
}
