//! Error type shared by every party operation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Result type for party operations
pub type PartyResult<T> = Result<T, PartyError>;

/// Errors returned by party operations.
///
/// Every operation validates before it mutates, so an error always means
/// the party was left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("You already voted")]
    DuplicateVote,

    #[error("Could not allocate party id after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },
}

impl PartyError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            PartyError::NotFound(_) => "NOT_FOUND",
            PartyError::InvalidInput(_) => "INVALID_INPUT",
            PartyError::Forbidden(_) => "FORBIDDEN",
            PartyError::InvalidState(_) => "INVALID_STATE",
            PartyError::DuplicateVote => "DUPLICATE_VOTE",
            PartyError::CapacityExhausted { .. } => "CAPACITY_EXHAUSTED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PartyError::NotFound(_) => StatusCode::NOT_FOUND,
            PartyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PartyError::Forbidden(_) => StatusCode::FORBIDDEN,
            PartyError::InvalidState(_) | PartyError::DuplicateVote => StatusCode::CONFLICT,
            PartyError::CapacityExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// JSON body returned for error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub detail: String,
}

impl IntoResponse for PartyError {
    fn into_response(self) -> Response {
        if matches!(self, PartyError::CapacityExhausted { .. }) {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Rejected request: {} ({})", self, self.code());
        }

        let body = ErrorBody {
            code: self.code(),
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
