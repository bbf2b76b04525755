use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::identity::{Claims, IdentityService},
    state::AppState,
};

/// Per-request guard that authenticates callers by bearer token.
///
/// Construction is cheap; nothing happens until `require()` is called. The
/// header is checked locally first, so requests without a usable bearer token
/// are rejected before any outbound call is made.
pub struct BearerGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> BearerGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request, returning the caller's claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token present and accepted by the identity service
    /// - `Err(AppError::AuthErr)` - Missing/malformed header or rejected token
    pub async fn require(&self) -> Result<Claims, AppError> {
        let token = self.bearer_token()?;

        let identity = IdentityService::new(&self.state.http_client, &self.state.auth_api_url);
        let claims = identity.verify(token).await?;

        Ok(claims)
    }

    /// Extracts the bearer token from the Authorization header.
    fn bearer_token(&self) -> Result<&str, AuthError> {
        let value = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingBearer)?;

        value.strip_prefix("Bearer ").ok_or(AuthError::MissingBearer)
    }
}
