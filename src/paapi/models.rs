//! Data models for search queries and normalized search results.

use serde::{Deserialize, Serialize};

/// A caller-facing product search query.
///
/// Schema validation (non-empty keywords, non-negative prices, min <= max,
/// sort key enumeration) is the caller's responsibility; these fields are
/// carried through as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text search keywords
    pub keywords: String,
    /// Provider search index (category) filter
    pub category: Option<String>,
    /// Minimum price in major currency units
    pub min_price: Option<f64>,
    /// Maximum price in major currency units
    pub max_price: Option<f64>,
    /// Provider sort key, passed through unchanged
    pub sort_by: Option<String>,
}

impl SearchQuery {
    /// Creates a keywords-only query.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self { keywords: keywords.into(), ..Self::default() }
    }
}

/// A normalized product from the provider's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Amazon Standard Identification Number
    pub asin: String,
    /// Display title, falling back to the ASIN when absent upstream
    pub title: String,
    /// Affiliate-tagged product page URL
    pub detail_page_url: Option<String>,
    /// First offer listing's price, if it carried a display string
    pub price: Option<NormalizedPrice>,
    /// Star rating in [0, 5]
    pub rating: Option<f64>,
    /// Total review count
    pub total_reviews: Option<u32>,
    /// Primary image thumbnail URL
    pub image_url: Option<String>,
}

/// Price of the first offer listing.
///
/// A listing without a display string yields no price at all, so `display`
/// is always present here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedPrice {
    /// Human-readable price string as rendered by the provider
    pub display: String,
    /// Numeric amount in major currency units
    pub amount: Option<f64>,
    /// Currency code (USD, EUR, etc.)
    pub currency: Option<String>,
}

/// Search results in provider reply order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Normalized products, order preserved from the reply
    pub products: Vec<ProductSummary>,
    /// Provider-assigned request identifier, when present
    pub request_id: Option<String>,
}

impl SearchResult {
    /// Returns number of products.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Returns true if no products were found.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_product() -> ProductSummary {
        ProductSummary {
            asin: "B0TEST123".to_string(),
            title: "Test Product".to_string(),
            detail_page_url: Some("https://www.amazon.com/dp/B0TEST123".to_string()),
            price: Some(NormalizedPrice {
                display: "$19.99".to_string(),
                amount: Some(19.99),
                currency: Some("USD".to_string()),
            }),
            rating: Some(4.5),
            total_reviews: Some(100),
            image_url: None,
        }
    }

    #[test]
    fn test_query_new() {
        let query = SearchQuery::new("headphones");
        assert_eq!(query.keywords, "headphones");
        assert!(query.category.is_none());
        assert!(query.min_price.is_none());
        assert!(query.max_price.is_none());
        assert!(query.sort_by.is_none());
    }

    #[test]
    fn test_search_result_counts() {
        let mut result = SearchResult { products: Vec::new(), request_id: None };
        assert!(result.is_empty());
        assert_eq!(result.count(), 0);

        result.products.push(make_test_product());
        assert!(!result.is_empty());
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_product_serde() {
        let product = make_test_product();
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("B0TEST123"));
        assert!(json.contains("Test Product"));

        let parsed: ProductSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.asin, product.asin);
        assert_eq!(parsed.title, product.title);
        assert_eq!(parsed.rating, Some(4.5));
    }

    #[test]
    fn test_query_serde() {
        let query = SearchQuery {
            keywords: "headphones".to_string(),
            category: Some("Electronics".to_string()),
            min_price: Some(12.34),
            max_price: Some(199.99),
            sort_by: Some("Featured".to_string()),
        };
        let json = serde_json::to_string(&query).unwrap();
        let parsed: SearchQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.keywords, "headphones");
        assert_eq!(parsed.category.as_deref(), Some("Electronics"));
        assert_eq!(parsed.min_price, Some(12.34));
    }
}
