//! Message trigger handlers, one per recipient-selector kind.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::dispatch::RecipientSelector;
use crate::error::{AppError, Result};
use crate::server::AppState;

use super::models::{MessageRequest, MessageResponse};

/// Header carrying the topic-condition expression on `POST /api/v1/messages`
pub const TOPIC_CONDITION_HEADER: &str = "X-Topic-Condition";

/// Send to devices whose subscriptions satisfy a topic-condition expression,
/// e.g. `'Technology' in topics || 'Automotive' in topics`
#[tracing::instrument(name = "api.push_to_condition", skip(state, headers, request))]
pub async fn push_to_condition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>> {
    let condition = headers
        .get(TOPIC_CONDITION_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::Validation(format!("missing required header {}", TOPIC_CONDITION_HEADER))
        })?;

    let selector = RecipientSelector::TopicCondition(condition.to_string());
    let message_id = state.dispatcher.dispatch(&selector, &request.into()).await?;

    Ok(Json(MessageResponse { message_id }))
}

/// Send to devices subscribed to the topic named in the path
#[tracing::instrument(name = "api.push_to_topic", skip(state, request), fields(topic = %topic))]
pub async fn push_to_topic(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>> {
    let selector = RecipientSelector::Topic(topic);
    let message_id = state.dispatcher.dispatch(&selector, &request.into()).await?;

    Ok(Json(MessageResponse { message_id }))
}

/// Send to the single device identified by the registration token in the path
#[tracing::instrument(name = "api.push_to_token", skip(state, token, request))]
pub async fn push_to_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>> {
    let selector = RecipientSelector::DeviceToken(token);
    let message_id = state.dispatcher.dispatch(&selector, &request.into()).await?;

    Ok(Json(MessageResponse { message_id }))
}
