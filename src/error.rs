use crate::models::api::ErrorResponse;
use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use thiserror::Error;

pub const INVALID_MESSAGES: &str = "Invalid messages format";
pub const INVALID_JSON: &str = "Invalid JSON body";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),
    /// The detail is logged, never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::Validation(_) => StatusCode::BAD_REQUEST,
            ChatError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &str {
        match self {
            ChatError::Validation(msg) => msg,
            ChatError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse { error: self.public_message().to_string() });
        (self.status(), body).into_response()
    }
}
