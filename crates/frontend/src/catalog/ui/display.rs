//! Display fallbacks for nullable product fields.

use contracts::domain::product::Product;

/// Numeric amount as shown after the ৳ sign, "N/A" when absent.
pub fn amount_label(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{}", value),
        None => "N/A".to_string(),
    }
}

pub fn name_label(product: &Product) -> String {
    product
        .name
        .clone()
        .unwrap_or_else(|| "Unnamed Product".to_string())
}

pub fn category_label(product: &Product) -> String {
    product
        .category_name()
        .unwrap_or("N/A")
        .to_string()
}

pub fn code_label(product: &Product) -> String {
    product.code.clone().unwrap_or_else(|| "N/A".to_string())
}

pub fn description_label(product: &Product) -> String {
    product
        .short_desc
        .clone()
        .unwrap_or_else(|| "No description available.".to_string())
}

pub fn stock_label(product: &Product) -> String {
    match product.stock {
        Some(stock) => stock.to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_product() -> Product {
        Product {
            id: 1,
            name: None,
            code: None,
            price: None,
            discount_amount: None,
            stock: None,
            short_desc: None,
            image: None,
            category: None,
            product_images: vec![],
        }
    }

    #[test]
    fn null_fields_get_fixed_fallback_text() {
        let p = bare_product();
        assert_eq!(name_label(&p), "Unnamed Product");
        assert_eq!(category_label(&p), "N/A");
        assert_eq!(code_label(&p), "N/A");
        assert_eq!(description_label(&p), "No description available.");
        assert_eq!(stock_label(&p), "N/A");
        assert_eq!(amount_label(p.price), "N/A");
    }

    #[test]
    fn whole_amounts_render_without_decimals() {
        assert_eq!(amount_label(Some(1490.0)), "1490");
        assert_eq!(amount_label(Some(79.5)), "79.5");
    }
}
