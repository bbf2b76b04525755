use axum::{http::header, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{host, panel},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "panel", description = "Panel provisioning"),
    (name = "host", description = "Hosts available for provisioning"),
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    // Browser clients call the API cross-origin; preflight requests are
    // answered by the CORS layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(panel::create_panel))
        .routes(routes!(host::list_hosts))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors)
}
