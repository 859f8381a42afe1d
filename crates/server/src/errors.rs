use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use configs::StatusPolicy;
use service::{ErrorKind, RideError};
use thiserror::Error;

/// A ride failure on its way out, paired with the status mapping in force.
#[derive(Debug)]
pub struct ApiError {
    pub err: RideError,
    pub policy: StatusPolicy,
}

impl ApiError {
    pub fn new(err: RideError, policy: StatusPolicy) -> Self {
        Self { err, policy }
    }
}

pub fn status_for(kind: ErrorKind, policy: StatusPolicy) -> StatusCode {
    match policy {
        StatusPolicy::AlwaysOk => StatusCode::OK,
        StatusPolicy::Conventional => match kind {
            ErrorKind::ValidationError => StatusCode::BAD_REQUEST,
            ErrorKind::RidesNotFoundError => StatusCode::NOT_FOUND,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.err.kind(), self.policy);
        (status, Json(self.err.envelope())).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database setup failed: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
