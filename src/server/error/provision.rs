use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ProvisionError {
    /// User creation hit a 422 conflict and the email lookup found no account.
    ///
    /// The username or email is taken by an account this system cannot see.
    /// Results in a 400 Bad Request response.
    #[error("Panel user creation failed: username or email already in use")]
    AccountInUse,

    /// The fallback account lookup itself failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to check for an existing panel account")]
    AccountLookupFailed,

    /// Any other upstream failure status from the control-panel API.
    ///
    /// The upstream status code and body text are passed through to the caller.
    #[error("Control panel API error: {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure talking to the control-panel API.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Converts provisioning errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For unresolvable account conflicts
/// - 500 Internal Server Error - For failed account lookups and transport errors
/// - Upstream status - For `Upstream`, preserving the remote API's status code
///   (falling back to 500 if the code is not a valid HTTP status)
impl IntoResponse for ProvisionError {
    fn into_response(self) -> Response {
        match self {
            Self::AccountInUse => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccountLookupFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    Json(ErrorDto {
                        error: format!("Control panel API error: {}", body),
                    }),
                )
                    .into_response()
            }
            Self::Transport(err) => {
                tracing::error!("Control panel API transport error: {}", err);
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
