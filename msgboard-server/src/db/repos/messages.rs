//! Message repository
//!
//! Insert and newest-first listing over the `messages` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewMessage;

/// Message record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    pub id: i32,
    pub author: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Storage operations the HTTP layer depends on.
///
/// Handlers only see this trait, so the pool is injected through
/// [`crate::AppState`] and tests can swap in their own store.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert one message; storage assigns `id` and `created_at`.
    async fn insert(&self, message: NewMessage) -> Result<Message, DbError>;

    /// All messages, newest first. Ties on `created_at` fall back to `id` descending.
    async fn list_all(&self) -> Result<Vec<Message>, DbError>;

    /// Round-trip to storage.
    async fn ping(&self) -> Result<(), DbError>;
}

/// PostgreSQL-backed message store
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, message: NewMessage) -> Result<Message, DbError> {
        let row: Message = sqlx::query_as(
            r#"
            INSERT INTO messages (author, content)
            VALUES ($1, $2)
            RETURNING id, author, content, created_at
            "#,
        )
        .bind(message.author.as_ref().map(|a| a.as_str()))
        .bind(message.content.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, "message inserted");
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Message>, DbError> {
        let rows = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, author, content, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
