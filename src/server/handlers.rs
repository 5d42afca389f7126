use super::types::{ErrorResponse, HealthResponse, TutorReply, TutorRequest};
use crate::{Error, config::TutorConfig, inference::TutorClient};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const MESSAGE_REQUIRED: &str = "Message is required.";
pub const INVALID_BODY: &str = "Invalid request body.";
pub const TUTOR_FAILED: &str = "Failed to get a response from the tutor.";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn TutorClient>,
    pub tutor: Arc<TutorConfig>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Falls back to `default` when the field is absent or blank.
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns `(message, language, topic)` or a validation error for a blank message.
fn validate(
    request: TutorRequest,
    defaults: &TutorConfig,
) -> crate::Result<(String, String, String)> {
    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| Error::validation(MESSAGE_REQUIRED))?;
    let language = or_default(request.language, &defaults.default_language);
    let topic = or_default(request.topic, &defaults.default_topic);

    Ok((message, language, topic))
}

pub async fn tutor(
    State(state): State<AppState>,
    payload: Result<Json<TutorRequest>, JsonRejection>,
) -> Result<Json<TutorReply>, ErrorReply> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected tutor request body: {}", rejection.body_text());
        error_reply(StatusCode::BAD_REQUEST, INVALID_BODY)
    })?;

    let (message, language, topic) = validate(request, &state.tutor).map_err(|e| {
        debug!("Invalid tutor request: {}", e);
        error_reply(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED)
    })?;

    info!("Received tutor request (language: {}, topic: {})", language, topic);

    match state.client.generate(&message, &language, &topic).await {
        Ok(reply) => {
            info!("Tutor reply generated ({} chars)", reply.chars().count());
            Ok(Json(TutorReply { reply }))
        }
        Err(e) => {
            error!("Error calling inference API: {}", e);
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, TUTOR_FAILED))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
