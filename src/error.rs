//! Defines the app level error type and its conversion to HTTP responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The message sent to clients that ask for an unusable number of transactions.
pub const INVALID_COUNT_MESSAGE: &str = "Invalid value for transaction count";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested transaction count was not an integer or was outside of
    /// the accepted range.
    ///
    /// Callers should pass in the raw value that was rejected.
    #[error("invalid transaction count \"{0}\"")]
    InvalidCount(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The CSV writer failed while rendering transactions.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not write CSV: {0}")]
    Csv(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidCount(value) => {
                tracing::debug!("Rejected transaction count {value:?}");
                (StatusCode::BAD_REQUEST, INVALID_COUNT_MESSAGE).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, check the server logs for more details.",
                )
                    .into_response()
            }
        }
    }
}
