//! Mapping of session errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use mindmap_core::{CodecError, GraphError, SessionError, StorageError};

use super::models::ErrorResponse;

/// An error returned by an API handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<GraphError> for ApiError {
    fn from(err: GraphError) -> Self {
        let status = match &err {
            GraphError::TopicNotFound { .. } => StatusCode::NOT_FOUND,
            GraphError::DuplicateTopic(_) | GraphError::ReverseExists { .. } => StatusCode::CONFLICT,
            GraphError::EmptyName
            | GraphError::InvalidName(_)
            | GraphError::MissingInput
            | GraphError::SelfLoop(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Graph(e) => e.into(),
            SessionError::Storage(e) => {
                let status = match &e {
                    StorageError::NotFound(_) => StatusCode::NOT_FOUND,
                    StorageError::Codec(CodecError::MalformedDocument(_)) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    StorageError::Codec(CodecError::Encode(_)) | StorageError::Io { .. } => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("storage failure: {}", e);
                }
                Self {
                    status,
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}
