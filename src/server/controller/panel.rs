use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        panel::{CreatePanelDto, ProvisionResultDto},
    },
    server::{
        error::AppError, middleware::auth::BearerGuard, model::panel::CreatePanelParam,
        service::panel::PanelProvisionService, state::AppState,
    },
};

/// Tag for grouping panel endpoints in OpenAPI documentation
pub static PANEL_TAG: &str = "panel";

/// POST /api/panels - Provision a new hosting panel
///
/// Creates a panel account on the remote control panel of the requested host:
/// a remote user (reusing an existing account on an email match after a
/// collision), a remote game server owned by that user, and a local panel
/// record with the credentials and both remote ids. Server creation failing
/// is not an error; the response then carries a pending message and a null
/// remote server id.
///
/// # Authentication
/// Requires a valid bearer token, verified against the identity service
///
/// # Arguments
/// - `state` - Application state containing the database and HTTP client
/// - `headers` - Request headers carrying the Authorization bearer token
/// - `payload` - Requested account details and resource sizing
///
/// # Returns
/// - `200 OK`: Provisioning result, complete or server-pending
/// - `400 Bad Request`: Username or email already in use remotely
/// - `401 Unauthorized`: Missing/malformed bearer token or rejected token
/// - `404 Not Found`: Host id does not resolve to a host
/// - `500 Internal Server Error`: Database, lookup, or transport error
#[utoipa::path(
    post,
    path = "/api/panels",
    tag = PANEL_TAG,
    request_body = CreatePanelDto,
    responses(
        (status = 200, description = "Panel provisioned (complete or server-pending)", body = ProvisionResultDto),
        (status = 400, description = "Username or email already in use", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Host not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePanelDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = BearerGuard::new(&state, &headers).require().await?;

    let param = CreatePanelParam::from_dto(claims.id, payload);
    let outcome = PanelProvisionService::new(&state.db, &state.http_client)
        .provision(param)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
