use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::snapshot::cache::SnapshotCache;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) cache: Arc<SnapshotCache>,
}

impl AppState {
    pub fn new(config: Configuration, cache: Arc<SnapshotCache>) -> AppState {
        AppState {
            config,
            cache,
        }
    }
}

// Error shape surfaced at the HTTP boundary: { error, details? }.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub(crate) struct ServerError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ServerError {
    fn new(status: StatusCode, error: &str, details: Option<String>) -> Self {
        Self {
            status,
            body: ErrorBody { error: error.to_string(), details },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { ref message, ref reason_code } => {
                ServerError::new(StatusCode::BAD_REQUEST, message.as_str(), reason_code.clone())
            }
            CommandError::Upstream { ref message, .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR,
                                 "Failed to load inventory snapshot", Some(message.clone()))
            }
            CommandError::Parse { ref message } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR,
                                 "Failed to parse inventory snapshot", Some(message.clone()))
            }
            CommandError::Serialization { ref message } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR,
                                 "Internal error", Some(message.clone()))
            }
            CommandError::Runtime { .. } | CommandError::Other { .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR,
                                 "Internal error", Some(format!("{:?}", err)))
            }
        }
    }
}
