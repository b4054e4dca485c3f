use serde::{Deserialize, Serialize};

use shopkeep_core::Pagination;

/// Product — belongs to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Storage-generated identifier.
    pub id: i64,

    /// Display name, required, at most 100 characters.
    pub name: String,

    /// The owning category's id.
    pub category_id: i64,

    pub created_at: String,
    pub updated_at: String,
}

/// A product row joined with its category name, as shown on the list page.
///
/// `category_name` is `None` for an orphaned row (a product whose
/// category no longer resolves); the page renders a placeholder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductListing {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: Option<String>,
}

/// One page of the product list.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<ProductListing>,
    pub pagination: Pagination,
}

/// A single product with its category name resolved, for the detail,
/// edit, and delete-confirm pages.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub category_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_json_roundtrip() {
        let p = Product {
            id: 4,
            name: "Paperback".into(),
            category_id: 2,
            created_at: "2026-01-01T00:00:00+00:00".into(),
            updated_at: "2026-01-02T00:00:00+00:00".into(),
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
