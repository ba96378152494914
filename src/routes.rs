// Route definitions and rejection recovery

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::handlers::{self, ApiError};
use crate::models::ErrorBody;
use crate::state::SharedState;

pub fn configure_routes(
    state: SharedState,
) -> impl Filter<Extract = impl warp::Reply, Error = Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    // GET /
    let root = warp::path::end()
        .and(warp::get())
        .and_then(handlers::root_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(state_filter)
        .and(warp::body::json())
        .and_then(handlers::chat_handler);

    // POST /reset-chat/{session_id}
    let reset_chat = warp::path("reset-chat")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::post())
        .and_then(handlers::reset_chat_handler);

    root.or(health).or(chat).or(reset_chat)
}

/// Translate rejections into `{detail}` error bodies
///
/// Handlers only raise `ApiError`; everything else here covers framework
/// rejections (bad JSON bodies, unknown paths) and the catch-all for
/// anything unexpected, which is logged and surfaced generically.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        log::error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error generating response".to_string(),
        )
    };

    let body = warp::reply::json(&ErrorBody { detail });
    Ok(warp::reply::with_status(body, status))
}
