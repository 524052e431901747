//! Catalog wire types.
//!
//! These mirror the remote catalog API's JSON payloads. Prices stay as
//! [`RawPrice`] here; normalization happens when a product enters the
//! cart, not at the catalog boundary.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::RawPrice;

/// One product as it appears in a catalog list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Catalog product identifier.
    pub product_id: ProductId,
    /// Thumbnail image URL.
    pub image_url: String,
    /// Price as sent by the API; number, string, or absent.
    #[serde(default)]
    pub price: Option<RawPrice>,
}

/// One page of the paginated product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    /// Products on this page, in catalog order.
    pub products: Vec<ProductSummary>,
    /// Whether another page exists after this one.
    pub more_products: bool,
}

/// Full detail for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    /// Gallery image URLs.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Price as sent by the API.
    #[serde(default)]
    pub price: Option<RawPrice>,
    /// Short marketing description.
    #[serde(default)]
    pub short_description: Option<String>,
    /// Screen size, e.g. `"15.6 inch"`.
    #[serde(default)]
    pub screen_size: Option<String>,
    /// Weight, e.g. `"1.8 kg"`.
    #[serde(default)]
    pub weight: Option<String>,
    /// Battery specification.
    #[serde(default)]
    pub battery_spec: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_page_from_wire_json() {
        let json = r#"{
            "products": [
                {"productId": "p1", "imageUrl": "https://cdn/p1.jpg", "price": "$999"},
                {"productId": "p2", "imageUrl": "https://cdn/p2.jpg", "price": 1299}
            ],
            "moreProducts": true
        }"#;

        let page: CatalogPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 2);
        assert!(page.more_products);
        assert_eq!(page.products[0].product_id, ProductId::new("p1"));
        assert_eq!(
            page.products[1].price,
            Some(RawPrice::Number(1299.0))
        );
    }

    #[test]
    fn test_catalog_page_missing_required_field_is_an_error() {
        // `moreProducts` is required; its absence must fail the parse
        let json = r#"{"products": []}"#;
        assert!(serde_json::from_str::<CatalogPage>(json).is_err());
    }

    #[test]
    fn test_product_detail_tolerates_sparse_payloads() {
        let json = r#"{"imageUrls": ["https://cdn/a.jpg"], "price": "1450"}"#;
        let detail: ProductDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.image_urls.len(), 1);
        assert!(detail.short_description.is_none());
    }
}
