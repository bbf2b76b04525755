use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::host::HostDto,
};

pub async fn get_hosts(token: &str) -> Result<Vec<HostDto>, ApiError> {
    let request = get("/api/hosts", token);
    let response = send_request(request).await?;
    parse_response(response).await
}
