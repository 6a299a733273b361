use super::types::{
    ChatRequest, ChatResponse, EMPTY_RESPONSE_ERROR, ErrorResponse, HealthResponse,
    NO_MESSAGE_ERROR, UPSTREAM_FAILURE_ERROR,
};
use crate::{Error, assistant::Assistant};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../../static/index.html");

type ErrorReply = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ErrorReply> {
    let request_id = Uuid::new_v4();

    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) => message,
        Ok(_) => {
            warn!("Chat request {} has no message field", request_id);
            return Err(error_reply(StatusCode::BAD_REQUEST, NO_MESSAGE_ERROR));
        }
        Err(rejection) => {
            warn!("Rejected chat request {}: {}", request_id, rejection);
            return Err(error_reply(StatusCode::BAD_REQUEST, NO_MESSAGE_ERROR));
        }
    };

    info!(
        "Received chat request {} ({} chars)",
        request_id,
        message.chars().count()
    );

    match state.assistant.reply(&message).await {
        Ok(response) => {
            info!("Successfully answered chat request {}", request_id);
            Ok(Json(ChatResponse { response }))
        }
        Err(e) => {
            warn!("Chat request {} failed: {}", request_id, e);
            Err(map_error(&e))
        }
    }
}

/// Maps assistant failures to the fixed client-facing messages.
pub fn map_error(error: &Error) -> ErrorReply {
    match error {
        Error::InvalidInput(_) => error_reply(StatusCode::BAD_REQUEST, NO_MESSAGE_ERROR),
        Error::EmptyResponse => error_reply(StatusCode::INTERNAL_SERVER_ERROR, EMPTY_RESPONSE_ERROR),
        _ => error_reply(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_ERROR),
    }
}

fn error_reply(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
