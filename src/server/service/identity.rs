//! Client for the external identity service.
//!
//! Bearer tokens presented by callers are never decoded locally; they are
//! forwarded to the identity service, which answers with the claims of the
//! authenticated subject.

use serde::Deserialize;
use uuid::Uuid;

use crate::server::error::auth::AuthError;

/// Claims returned by the identity service for a verified token.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject id of the authenticated user.
    pub id: Uuid,
}

pub struct IdentityService<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> IdentityService<'a> {
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Verifies a bearer token and returns the caller's claims.
    ///
    /// # Arguments
    /// - `token` - Bearer token value, without the "Bearer " prefix
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token accepted; claims of the authenticated subject
    /// - `Err(AuthError::InvalidToken)` - The identity service rejected the token
    /// - `Err(AuthError::IdentityUnavailable)` - Transport failure or unexpected answer
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let response = self
            .http_client
            .get(format!("{}/user", self.base_url.trim_end_matches('/')))
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AuthError::IdentityUnavailable(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidToken);
        }

        if !status.is_success() {
            return Err(AuthError::IdentityUnavailable(format!(
                "Unexpected status {} from identity service",
                status
            )));
        }

        response
            .json::<Claims>()
            .await
            .map_err(|e| AuthError::IdentityUnavailable(e.to_string()))
    }
}
