// GET /, GET /health and POST /reset-chat/{session_id} handlers

use chrono::Utc;

use crate::models::{HealthResponse, StatusMessage};

pub async fn root_handler() -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&StatusMessage {
        message: "AI Chatbot API is running!".to_string(),
    }))
}

pub async fn health_handler() -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Documented no-op: sessions carry no server-side state, so there is
/// nothing to reset. The identifier is acknowledged for client symmetry.
pub async fn reset_chat_handler(session_id: String) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&StatusMessage {
        message: format!("Session ID '{}' reset (no session state stored).", session_id),
    }))
}
