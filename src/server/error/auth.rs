use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The Authorization header was absent or did not carry a Bearer prefix.
    ///
    /// Rejected before any outbound call is made. Results in a 401 Unauthorized
    /// response.
    #[error("Missing or malformed Authorization header")]
    MissingBearer,

    /// The identity service rejected the presented token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Identity service rejected the token")]
    InvalidToken,

    /// The identity service could not be reached or answered abnormally.
    ///
    /// The caller's token may well be valid; this is an infrastructure failure
    /// and results in a 500 Internal Server Error response.
    #[error("Failed to verify token against the identity service: {0}")]
    IdentityUnavailable(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems map to 401 Unauthorized with a generic message; identity
/// service outages map to 500 Internal Server Error. Details are logged
/// server-side while client-facing messages stay generic to avoid information
/// leakage.
///
/// # Returns
/// - 401 Unauthorized - For `MissingBearer` and `InvalidToken`
/// - 500 Internal Server Error - For `IdentityUnavailable`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingBearer | Self::InvalidToken => {
                tracing::debug!("Rejected request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::IdentityUnavailable(msg) => {
                tracing::error!("Identity service failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
