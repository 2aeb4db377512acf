use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Resource not found error.
    NotFound(String),
    /// Bad request error (missing input).
    BadRequest(String),
    /// Error setting up or talking to an external API.
    ExternalApiError(String),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::ExternalApiError(msg) => write!(f, "External API error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    /// Server-side failures are logged; client errors keep their message.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalApiError(msg) => {
                tracing::error!("External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "External service error".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<tera::Error> for AppError {
    /// Converts a template failure into an `AppError`.
    fn from(err: tera::Error) -> Self {
        AppError::InternalError(format!("Template error: {}", err))
    }
}

/// Ways a call to the upstream player-info service can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The service answered with a non-success status code.
    Status(u16),
    /// The request never completed: connection failure, timeout, broken body.
    Network(String),
    /// The service answered, but the body is not a JSON document.
    Malformed(String),
    /// The lookup URL could not be built from the configured endpoint.
    InvalidEndpoint(String),
}

impl UpstreamError {
    /// Whether this failure happened at the transport level.
    pub fn is_network(&self) -> bool {
        matches!(self, UpstreamError::Network(_))
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Status(code) => write!(f, "upstream returned status {}", code),
            UpstreamError::Network(msg) => write!(f, "{}", msg),
            UpstreamError::Malformed(msg) => write!(f, "invalid upstream response: {}", msg),
            UpstreamError::InvalidEndpoint(msg) => write!(f, "invalid upstream endpoint: {}", msg),
        }
    }
}

impl std::error::Error for UpstreamError {}
