//! Message endpoints: send, list, edit and delete.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{MessageId, MessageKind, MessageText, ParticipantName, Recipient},
    infrastructure::dto::http::{
        EditMessageRequest, ListMessagesQuery, MessageDto, SendMessageRequest,
    },
    ui::{
        error::{ApiError, FieldErrors},
        state::AppState,
    },
    usecase::{
        DeleteMessageUseCase, EditMessageUseCase, ListMessagesUseCase, SendMessageUseCase,
    },
};

use super::{caller_identity, caller_name};

/// `POST /messages`
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let Json(request) = payload?;

    let mut errors = FieldErrors::default();
    let from = errors.field(
        "user",
        caller_identity(&headers).map(str::to_string),
        ParticipantName::new,
    );
    let to = errors.field("to", request.to, Recipient::new);
    let text = errors.field("text", request.text, MessageText::new);
    let kind = errors.field("type", request.r#type, |kind| MessageKind::from_client(&kind));
    let (Some(from), Some(to), Some(text), Some(kind)) = (from, to, text, kind) else {
        return Err(errors.into());
    };

    let usecase = SendMessageUseCase::new(state.repository.clone(), state.clock.clone());
    let message = usecase.execute(from, to, text, kind).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::from_domain(&message, state.utc_offset_minutes)),
    ))
}

/// `GET /messages?limit=N`
///
/// Without an identity header only broadcasts are visible.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let viewer = caller_name(&headers);

    let usecase = ListMessagesUseCase::new(state.repository.clone());
    let messages = usecase.execute(viewer, query.limit()).await?;

    Ok(Json(
        messages
            .iter()
            .map(|m| MessageDto::from_domain(m, state.utc_offset_minutes))
            .collect(),
    ))
}

/// `PUT /messages/{id}`
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<EditMessageRequest>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let requester = require_caller(&headers)?;
    let id = parse_message_id(&id)?;
    let Json(request) = payload?;

    let mut errors = FieldErrors::default();
    let Some(text) = errors.field("text", request.text, MessageText::new) else {
        return Err(errors.into());
    };

    let usecase = EditMessageUseCase::new(state.repository.clone(), state.clock.clone());
    let message = usecase.execute(id, &requester, text).await?;

    Ok(Json(MessageDto::from_domain(
        &message,
        state.utc_offset_minutes,
    )))
}

/// `DELETE /messages/{id}`
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let requester = require_caller(&headers)?;
    let id = parse_message_id(&id)?;

    let usecase = DeleteMessageUseCase::new(state.repository.clone());
    usecase.execute(id, &requester).await?;
    Ok(StatusCode::OK)
}

fn require_caller(headers: &HeaderMap) -> Result<ParticipantName, ApiError> {
    caller_name(headers).ok_or_else(|| ApiError::unauthorized("user header is required"))
}

/// Malformed ids cannot name a stored message
fn parse_message_id(id: &str) -> Result<MessageId, ApiError> {
    MessageId::parse(id).map_err(|_| ApiError::not_found(format!("message '{id}' not found")))
}
