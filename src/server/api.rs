use crate::error::{ ChatError, INVALID_JSON, INVALID_MESSAGES };
use crate::models::api::{ ChatResponse, HealthResponse };
use crate::models::chat::ChatMessage;
use crate::responder::ResponseSelector;
use std::any::Any;
use std::sync::Arc;
use axum::{
    body::Bytes,
    routing::{ get, post },
    Router,
    extract::State,
    response::{ Html, IntoResponse, Response },
    Json,
};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{ Any as AnyOrigin, CorsLayer };
use log::{ error, warn };

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<ResponseSelector>,
    pub serve_ui: bool,
}

impl AppState {
    pub fn new(selector: Arc<ResponseSelector>) -> Self {
        Self { selector, serve_ui: true }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let mut router = Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(health_handler));

    if state.serve_ui {
        router = router.route("/", get(index_handler));
    }

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// Pulls the `messages` array out of a chat request body.
pub fn parse_messages(body: &[u8]) -> Result<Vec<ChatMessage>, ChatError> {
    let mut value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected chat request: body is not JSON: {}", e);
        ChatError::Validation(INVALID_JSON.into())
    })?;

    let messages = match value.get_mut("messages") {
        Some(messages) if messages.is_array() => messages.take(),
        Some(_) => {
            warn!("Rejected chat request: 'messages' is not an array");
            return Err(ChatError::Validation(INVALID_MESSAGES.into()));
        }
        None => {
            warn!("Rejected chat request: 'messages' is missing");
            return Err(ChatError::Validation(INVALID_MESSAGES.into()));
        }
    };

    serde_json::from_value(messages).map_err(|e| {
        warn!("Rejected chat request: malformed message: {}", e);
        ChatError::Validation(INVALID_MESSAGES.into())
    })
}

async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    let messages = parse_messages(&body)?;
    let message = state.selector.reply(&messages);
    Ok(Json(ChatResponse { message }))
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse { status: "ok".into() })
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Chat API error: {}", detail);
    ChatError::Internal(detail).into_response()
}
