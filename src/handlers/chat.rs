// POST /chat handler

use chrono::Utc;
use uuid::Uuid;

use crate::llm::CompletionError;
use crate::models::{ChatRequest, ChatResponse};
use crate::state::SharedState;

/// Request failures carried through warp's rejection machinery
///
/// Translated into `{detail}` error bodies by the rejection recovery in
/// `routes.rs`; handlers never build error responses directly.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request content (400)
    Validation(String),
    /// Upstream completion failure (500)
    Upstream(CompletionError),
}

impl warp::reject::Reject for ApiError {}

pub async fn chat_handler(
    state: SharedState,
    payload: ChatRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(warp::reject::custom(ApiError::Validation(
            "message must not be empty".to_string(),
        )));
    }

    // Resolve or generate the correlation token; no server-side state is
    // attached to it.
    let session_id = payload
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    log::info!("POST /chat session={}", session_id);

    match state.completer.complete(trimmed).await {
        Ok(text) => Ok(warp::reply::json(&ChatResponse {
            response: text,
            session_id,
            timestamp: Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            log::error!("completion failed for session {}: {}", session_id, e);
            Err(warp::reject::custom(ApiError::Upstream(e)))
        }
    }
}
