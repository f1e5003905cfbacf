//! Message endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::Message;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::models::NewMessage;
use crate::state::AppState;

/// Create message request
///
/// A missing `content` deserializes to an empty string so it is rejected by
/// the same validation as `""`.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Response for a newly created message
#[derive(Debug, Serialize)]
pub struct CreatedMessageResponse {
    pub id: i32,
    pub author: Option<String>,
    pub content: String,
}

impl From<Message> for CreatedMessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            author: m.author,
            content: m.content,
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i32,
    pub author: Option<String>,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            author: m.author,
            content: m.content,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

/// GET /api/messages - all messages, newest first
async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state.store().list_all().await?;
    tracing::debug!(count = messages.len(), "listed messages");

    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// POST /api/messages - create a message
async fn create_message(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<CreatedMessageResponse>), ApiError> {
    let new_message = NewMessage::new(req.author, &req.content)?;

    let message = state.store().insert(new_message).await?;
    tracing::info!(id = message.id, "message created");

    Ok((StatusCode::CREATED, Json(CreatedMessageResponse::from(message))))
}

/// Message routes, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new().route("/messages", get(list_messages).post(create_message))
}
