use contracts::api::catalog::parse_catalog_body;
use contracts::domain::product::Product;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::catalog_url;

/// Fetch the full product catalog.
///
/// The endpoint wraps the list in a nested `{ data: { data: [...] } }`
/// envelope; a body that does not match it is reported as a parse
/// failure, never as partial data.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&catalog_url())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let fallback = format!("HTTP error: {}", response.status());
        return Err(server_message(&response).await.unwrap_or(fallback));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_catalog_body(&body)
}

/// The `message` field of an error body, when the server sent one.
pub async fn server_message(response: &Response) -> Option<String> {
    let value = response.json::<serde_json::Value>().await.ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
