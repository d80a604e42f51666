use serde::{Deserialize, Serialize};

/// Product category as embedded in the catalog response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub name: Option<String>,
}

/// Secondary product image reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    /// Filename under the remote storage path
    pub name: String,
}

/// A catalog product as returned by the remote API.
///
/// Every display-facing field is optional; the client does no
/// validation beyond null-coalescing at render time. Unknown fields
/// in the response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub discount_amount: Option<f64>,
    pub stock: Option<i64>,
    pub short_desc: Option<String>,
    /// Image filename, or None when the product has no image
    pub image: Option<String>,
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub product_images: Vec<ProductImage>,
}

impl Product {
    /// The struck-through "was" price shown next to a discounted
    /// price: list price plus the discount that was taken off it.
    /// None when the product has no price or no positive discount.
    pub fn strikethrough_price(&self) -> Option<f64> {
        match (self.price, self.discount_amount) {
            (Some(price), Some(discount)) if discount > 0.0 => Some(price + discount),
            _ => None,
        }
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn in_stock(&self) -> bool {
        self.stock.unwrap_or(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(price: Option<f64>, discount: Option<f64>) -> Product {
        Product {
            id: 1,
            name: None,
            code: None,
            price,
            discount_amount: discount,
            stock: None,
            short_desc: None,
            image: None,
            category: None,
            product_images: vec![],
        }
    }

    #[test]
    fn strikethrough_price_adds_discount_back() {
        assert_eq!(
            product(Some(1000.0), Some(100.0)).strikethrough_price(),
            Some(1100.0)
        );
    }

    #[test]
    fn strikethrough_price_absent_without_positive_discount() {
        assert_eq!(product(Some(1000.0), None).strikethrough_price(), None);
        assert_eq!(product(Some(1000.0), Some(0.0)).strikethrough_price(), None);
        assert_eq!(product(None, Some(100.0)).strikethrough_price(), None);
    }

    #[test]
    fn deserializes_full_product() {
        let value = json!({
            "id": 7,
            "name": "Premium Panjabi",
            "code": "PJ-07",
            "price": 1490.0,
            "discount_amount": 200.0,
            "stock": 12,
            "short_desc": "Slim fit",
            "image": "pj07.jpg",
            "category": { "name": "Panjabi" },
            "product_images": [ { "id": 1, "name": "pj07-a.jpg" } ],
            "unrelated_admin_field": true
        });
        let p: Product = serde_json::from_value(value).unwrap();
        assert_eq!(p.name.as_deref(), Some("Premium Panjabi"));
        assert_eq!(p.category_name(), Some("Panjabi"));
        assert_eq!(p.product_images.len(), 1);
        assert!(p.in_stock());
    }

    #[test]
    fn deserializes_with_null_fields() {
        let value = json!({
            "id": 9,
            "name": null,
            "code": null,
            "price": null,
            "discount_amount": null,
            "stock": null,
            "short_desc": null,
            "image": null,
            "category": null
        });
        let p: Product = serde_json::from_value(value).unwrap();
        assert_eq!(p.name, None);
        assert_eq!(p.category_name(), None);
        assert!(p.product_images.is_empty());
        assert!(!p.in_stock());
    }
}
