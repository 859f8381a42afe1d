use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Could not find any rides";
pub const SERVER_ERROR_MESSAGE: &str = "Unknown error";

/// Machine-readable error codes. No other code ever leaves the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ValidationError,
    RidesNotFoundError,
    ServerError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationError => "VALIDATION_ERROR",
            ErrorKind::RidesNotFoundError => "RIDES_NOT_FOUND_ERROR",
            ErrorKind::ServerError => "SERVER_ERROR",
        }
    }
}

/// Business errors for ride workflows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideError {
    /// Caller input violates a field constraint; the message names the field group.
    #[error("{0}")]
    Validation(String),
    /// A well-formed query matched zero records.
    #[error("Could not find any rides")]
    NotFound,
    /// The persistence layer failed. Driver details are logged, never carried.
    #[error("Unknown error")]
    Server,
}

impl RideError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RideError::Validation(_) => ErrorKind::ValidationError,
            RideError::NotFound => ErrorKind::RidesNotFoundError,
            RideError::Server => ErrorKind::ServerError,
        }
    }

    /// Stable string code for the wire and for logs
    pub fn code(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope { error_code: self.kind(), message: self.to_string() }
    }
}

/// Uniform `{error_code, message}` body returned for every failure kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error_code: ErrorKind,
    pub message: String,
}

impl From<RideError> for ErrorEnvelope {
    fn from(err: RideError) -> Self {
        err.envelope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn codes_are_stable() {
        assert_eq!(RideError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(RideError::NotFound.code(), "RIDES_NOT_FOUND_ERROR");
        assert_eq!(RideError::Server.code(), "SERVER_ERROR");
    }

    #[test]
    fn envelope_serializes_code_and_message() {
        let body = serde_json::to_value(RideError::NotFound.envelope()).unwrap();
        assert_eq!(body, json!({"error_code": "RIDES_NOT_FOUND_ERROR", "message": NOT_FOUND_MESSAGE}));

        let body = serde_json::to_value(ErrorEnvelope::from(RideError::Server)).unwrap();
        assert_eq!(body, json!({"error_code": "SERVER_ERROR", "message": SERVER_ERROR_MESSAGE}));
    }

    #[test]
    fn validation_message_is_passed_through() {
        let env = RideError::validation("Rider name must be a non empty string").envelope();
        assert_eq!(env.error_code, ErrorKind::ValidationError);
        assert_eq!(env.message, "Rider name must be a non empty string");
    }

    #[test]
    fn unknown_codes_do_not_deserialize() {
        let res = serde_json::from_value::<ErrorEnvelope>(json!({"error_code": "TEAPOT", "message": "no"}));
        assert!(res.is_err());
    }

    #[test]
    fn serde_name_matches_as_str() {
        for kind in [ErrorKind::ValidationError, ErrorKind::RidesNotFoundError, ErrorKind::ServerError] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }
}
