//! URL construction for the remote catalog/order API.
//!
//! Unlike a same-origin setup, every request goes to one fixed remote
//! origin; there is no backend of our own behind the page.

/// Origin of the third-party API that owns all data and business logic
pub const API_BASE: &str = "https://admin.refabry.com";

/// Base path for product image files referenced by the catalog
const STORAGE_BASE: &str = "https://admin.refabry.com/storage/product";

pub const LIST_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=No+Image";
pub const LIST_IMAGE_ERROR: &str = "https://via.placeholder.com/300x200?text=Image+Error";
pub const DETAIL_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/600x400?text=No+Image";
pub const DETAIL_IMAGE_ERROR: &str = "https://via.placeholder.com/600x400?text=Image+Error";

pub fn catalog_url() -> String {
    format!("{}/api/all/product/get", API_BASE)
}

pub fn order_create_url() -> String {
    format!("{}/api/public/order/create", API_BASE)
}

/// Full URL for a product image filename from the API
pub fn product_image_url(filename: &str) -> String {
    format!("{}/{}", STORAGE_BASE, filename)
}

/// Image URL for an optional filename, falling back to a placeholder
pub fn product_image_or(filename: Option<&str>, placeholder: &str) -> String {
    match filename {
        Some(name) => product_image_url(name),
        None => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        assert_eq!(catalog_url(), "https://admin.refabry.com/api/all/product/get");
        assert_eq!(
            order_create_url(),
            "https://admin.refabry.com/api/public/order/create"
        );
    }

    #[test]
    fn image_url_joins_storage_base() {
        assert_eq!(
            product_image_url("pj07.jpg"),
            "https://admin.refabry.com/storage/product/pj07.jpg"
        );
    }

    #[test]
    fn missing_image_uses_placeholder() {
        assert_eq!(
            product_image_or(None, LIST_IMAGE_PLACEHOLDER),
            LIST_IMAGE_PLACEHOLDER
        );
        assert_eq!(
            product_image_or(Some("a.jpg"), LIST_IMAGE_PLACEHOLDER),
            "https://admin.refabry.com/storage/product/a.jpg"
        );
    }
}
