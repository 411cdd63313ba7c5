//! Participant endpoints: join, list and heartbeat.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::ParticipantName,
    infrastructure::dto::http::{JoinRequest, ParticipantDto},
    ui::{
        error::{ApiError, FieldErrors},
        state::AppState,
    },
    usecase::{HeartbeatUseCase, JoinParticipantUseCase, ListParticipantsUseCase},
};

use super::caller_name;

/// `POST /participants`
pub async fn join(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParticipantDto>), ApiError> {
    let Json(request) = payload?;

    let mut errors = FieldErrors::default();
    let Some(name) = errors.field("name", request.name, ParticipantName::new) else {
        return Err(errors.into());
    };

    let usecase = JoinParticipantUseCase::new(state.repository.clone(), state.clock.clone());
    let participant = usecase.execute(name).await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipantDto::from_domain(
            &participant,
            state.utc_offset_minutes,
        )),
    ))
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let usecase = ListParticipantsUseCase::new(state.repository.clone());
    let participants = usecase.execute().await?;

    Ok(Json(
        participants
            .iter()
            .map(|p| ParticipantDto::from_domain(p, state.utc_offset_minutes))
            .collect(),
    ))
}

/// `POST /status`
///
/// A missing or unusable identity header is answered like an unknown participant.
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let Some(name) = caller_name(&headers) else {
        return Err(ApiError::not_found("participant not found"));
    };

    let usecase = HeartbeatUseCase::new(state.repository.clone(), state.clock.clone());
    usecase.execute(&name).await?;
    Ok(StatusCode::OK)
}
