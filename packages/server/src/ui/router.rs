//! HTTP routes.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    handler::{
        delete_message, edit_message, health_check, heartbeat, join, list_messages,
        list_participants, send_message,
    },
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/participants", get(list_participants).post(join))
        .route("/status", post(heartbeat))
        .route("/messages", get(list_messages).post(send_message))
        .route("/messages/{id}", put(edit_message).delete(delete_message))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
