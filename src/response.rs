//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{success: true}` acknowledgement returned by mutations.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
}

pub fn success() -> (StatusCode, Json<Ack>) {
    (StatusCode::OK, Json(Ack { success: true }))
}

/// Fixed error envelope: `{success: false, error: <code>, message: <text>}`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorBody {
    /// Envelope for one of the four reported codes; anything else is reported as 500.
    pub fn for_status(status: StatusCode) -> Self {
        let (error, message) = match status {
            StatusCode::BAD_REQUEST => (400, "bad request"),
            StatusCode::NOT_FOUND => (404, "Not found"),
            StatusCode::UNPROCESSABLE_ENTITY => (422, "Unprocessable"),
            _ => (500, "internal server error"),
        };
        ErrorBody {
            success: false,
            error,
            message,
        }
    }
}
