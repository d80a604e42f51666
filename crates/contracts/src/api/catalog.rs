use serde::Deserialize;

use crate::domain::product::Product;

/// Fixed error surfaced whenever the catalog body does not match the
/// expected envelope shape. Partial data is never returned.
pub const PARSE_ERROR: &str = "Failed to parse product data.";

/// Outer layer of the catalog response: `{ "data": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEnvelope {
    pub data: CatalogPage,
}

/// Inner layer carrying the product list: `{ "data": [Product] }`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<Product>,
}

impl CatalogEnvelope {
    pub fn into_products(self) -> Vec<Product> {
        self.data.data
    }
}

/// Parse a raw catalog response body into the product list.
///
/// Any deviation from the nested envelope (missing levels, `data.data`
/// not a list, malformed elements) maps to the one fixed
/// [`PARSE_ERROR`] string.
pub fn parse_catalog_body(body: &str) -> Result<Vec<Product>, String> {
    serde_json::from_str::<CatalogEnvelope>(body)
        .map(CatalogEnvelope::into_products)
        .map_err(|_| PARSE_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_envelope_yields_products() {
        let body = r#"{
            "data": {
                "data": [
                    { "id": 1, "name": "Shirt", "code": "S1", "price": 990,
                      "discount_amount": null, "stock": 3, "short_desc": null,
                      "image": "s1.jpg", "category": { "name": "Shirts" } },
                    { "id": 2, "name": null, "code": null, "price": null,
                      "discount_amount": null, "stock": null, "short_desc": null,
                      "image": null, "category": null }
                ]
            }
        }"#;
        let products = parse_catalog_body(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name.as_deref(), Some("Shirt"));
        assert_eq!(products[1].price, None);
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(parse_catalog_body(r#"{"data":{"data":[]}}"#).unwrap(), vec![]);
    }

    #[test]
    fn inner_data_not_a_list_is_a_parse_failure() {
        let result = parse_catalog_body(r#"{"data":{"data":{"id":1}}}"#);
        assert_eq!(result, Err(PARSE_ERROR.to_string()));
    }

    #[test]
    fn missing_envelope_levels_are_parse_failures() {
        for body in [r#"{}"#, r#"{"data":{}}"#, r#"{"data":[]}"#, "not json"] {
            assert_eq!(parse_catalog_body(body), Err(PARSE_ERROR.to_string()));
        }
    }
}
