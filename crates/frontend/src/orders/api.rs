use contracts::domain::order::CreateOrderRequest;
use gloo_net::http::Request;

use crate::catalog::api::server_message;
use crate::shared::api_utils::order_create_url;

pub const ORDER_FAILED_ERROR: &str = "Order failed! Please check details and try again.";

/// Submit an order. Only the server's `message` field is consumed from
/// an error response; everything else about the body is opaque.
pub async fn create_order(request: &CreateOrderRequest) -> Result<(), String> {
    let response = Request::post(&order_create_url())
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| ORDER_FAILED_ERROR.to_string())?;

    if !response.ok() {
        return Err(server_message(&response)
            .await
            .unwrap_or_else(|| ORDER_FAILED_ERROR.to_string()));
    }

    Ok(())
}
