//! Builds the provider's search request document from a caller query.

use crate::paapi::models::SearchQuery;
use serde::Serialize;

/// Partner type constant sent with every request.
pub const PARTNER_TYPE: &str = "Associates";

/// Response fields requested from the provider. Fixed and never computed
/// per-query.
pub const SEARCH_RESOURCES: [&str; 8] = [
    "Images.Primary.Small",
    "Images.Primary.Medium",
    "Images.Primary.Large",
    "ItemInfo.Title",
    "ItemInfo.ByLineInfo",
    "Offers.Listings.Price",
    "CustomerReviews.Count",
    "CustomerReviews.StarRating",
];

/// Sort keys the provider accepts. Enforced by the caller-facing validator,
/// not by the request builder.
pub const SORT_KEYS: [&str; 6] = [
    "Relevance",
    "Featured",
    "NewestArrivals",
    "AvgCustomerReviews",
    "Price:LowToHigh",
    "Price:HighToLow",
];

/// The exact document POSTed to the search endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    pub keywords: String,
    pub partner_tag: String,
    pub partner_type: &'static str,
    pub resources: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
}

impl SearchRequest {
    /// Builds the request document. Partner identity always comes from
    /// configuration, never from the query.
    pub fn build(query: &SearchQuery, partner_tag: &str) -> Self {
        Self {
            keywords: query.keywords.clone(),
            partner_tag: partner_tag.to_string(),
            partner_type: PARTNER_TYPE,
            resources: SEARCH_RESOURCES.to_vec(),
            search_index: query.category.clone(),
            sort_by: query.sort_by.clone(),
            min_price: query.min_price.map(minor_units),
            max_price: query.max_price.map(minor_units),
        }
    }
}

/// Converts a major-unit currency amount to integer minor units (cents).
///
/// Rounds half away from zero and clamps negative amounts to zero.
pub fn minor_units(amount: f64) -> i64 {
    (amount * 100.0).round().max(0.0) as i64
}
