use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, host::HostDto},
    server::{
        data::host::HostRepository, error::AppError, middleware::auth::BearerGuard,
        state::AppState,
    },
};

/// Tag for grouping host endpoints in OpenAPI documentation
pub static HOST_TAG: &str = "host";

/// GET /api/hosts - Get all hosts available for provisioning
///
/// Returns the hosts panels can be provisioned on, ordered by name. API keys
/// and domains are never included.
///
/// # Authentication
/// Requires a valid bearer token, verified against the identity service
///
/// # Returns
/// - `200 OK`: JSON array of HostDto
/// - `401 Unauthorized`: Missing/malformed bearer token or rejected token
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/hosts",
    tag = HOST_TAG,
    responses(
        (status = 200, description = "Available hosts", body = Vec<HostDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hosts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    BearerGuard::new(&state, &headers).require().await?;

    let hosts = HostRepository::new(&state.db).get_all().await?;
    let hosts_dto: Vec<_> = hosts.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(hosts_dto)))
}
