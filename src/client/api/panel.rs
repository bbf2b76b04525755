use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::panel::{CreatePanelDto, ProvisionResultDto},
};

pub async fn create_panel(
    token: &str,
    payload: &CreatePanelDto,
) -> Result<ProvisionResultDto, ApiError> {
    let body = serialize_json(payload)?;
    let request = post("/api/panels", token).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
