//! Shared test helpers: in-memory and failing message stores

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use msgboard_server::db::{DbError, Message, MessageStore};
use msgboard_server::http::{build_router, cors_layer};
use msgboard_server::models::NewMessage;
use msgboard_server::{AppState, ServerConfig};
use serde_json::Value;

/// Store keeping rows in memory. Each insert is stamped one second after the
/// previous one so ordering is deterministic.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<Message>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn insert(&self, message: NewMessage) -> Result<Message, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let row = Message {
            id,
            author: message.author.map(|a| a.into_string()),
            content: message.content.into_string(),
            created_at: base + Duration::seconds(id as i64),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Message>, DbError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// Store whose every operation fails as if the pool were exhausted.
pub struct FailingStore;

#[async_trait]
impl MessageStore for FailingStore {
    async fn insert(&self, _message: NewMessage) -> Result<Message, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> Result<Vec<Message>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub fn app(store: impl MessageStore + 'static) -> Router {
    let origins = ServerConfig::default().allowed_origins();
    build_router(AppState::new(store), cors_layer(&origins).unwrap())
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
