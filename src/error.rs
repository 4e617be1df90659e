use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Failure category of a single URL's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    UpstreamStatus(u16),
    Transport,
    Parse,
    Unexpected,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Timeout while fetching {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Error fetching {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Error parsing HTML for {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { status: u16, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::Timeout { .. } => FailureKind::Timeout,
            AppError::UpstreamStatus { status, .. } => FailureKind::UpstreamStatus(*status),
            AppError::Fetch { .. } => FailureKind::Transport,
            AppError::Parse { .. } => FailureKind::Parse,
            AppError::InvalidUrl { .. }
            | AppError::InvalidBody { .. }
            | AppError::Client(_)
            | AppError::ConfigError(_) => {
                FailureKind::Unexpected
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamStatus { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::InvalidUrl { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidBody { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AppError::Fetch { .. }
            | AppError::Parse { .. }
            | AppError::Client(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
