//! Router for the chat API

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::chat::next_turn;

type SharedState = Arc<RwLock<AppState>>;

/// Get the shared conversation so far
async fn chat_history(
    State(state): State<SharedState>,
) -> Result<Json<public::ChatTranscriptResponse>, ApiError> {
    let store = state
        .read()
        .map_err(|_| anyhow!("Unable to read shared state"))?
        .transcript
        .clone();
    let transcript = store.snapshot().await;

    Ok(Json(public::ChatTranscriptResponse { transcript }))
}

/// Send the next message in the conversation and respond with the
/// assistant's reply
async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let (store, relay, strict_errors) = {
        let shared_state = state
            .read()
            .map_err(|_| anyhow!("Unable to read shared state"))?;
        (
            shared_state.transcript.clone(),
            shared_state.relay.clone(),
            shared_state.config.strict_errors,
        )
    };

    match next_turn(&store, &relay, &payload.message).await {
        Ok(reply) => Ok(Json(public::ChatResponse::new(&reply)).into_response()),
        Err(e) => {
            tracing::error!("Chat relay error: {}", e);

            let status = if strict_errors {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::OK
            };
            Ok((status, Json(public::ChatResponse::failed(&e))).into_response())
        }
    }
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/history", get(chat_history))
}
