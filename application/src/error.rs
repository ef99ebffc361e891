//! [`Error`]-related definitions.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use derive_more::{Display, Error as StdError};
use serde::Serialize;

/// HTTP API error, rendered as an `{"error": "..."}` JSON body.
#[derive(Clone, Debug, Display, StdError)]
#[display("{message}")]
pub struct Error {
    /// [`http::StatusCode`] of this [`Error`].
    pub status_code: http::StatusCode,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Creates a new [`Error`] rejecting a malformed request.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: http::StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code, Json(Body { error: self.message }))
            .into_response()
    }
}

/// JSON body of an [`Error`] response.
#[derive(Clone, Debug, Serialize)]
struct Body {
    /// Human-readable error description.
    error: String,
}
