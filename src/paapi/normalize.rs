//! Defensive normalization of the provider's loosely-typed search reply.

use crate::paapi::error::PaapiError;
use crate::paapi::models::{NormalizedPrice, ProductSummary, SearchResult};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Top-level reply envelope. Items stay untyped; each one is mapped
/// defensively so a single malformed item never aborts the batch.
#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    #[serde(rename = "SearchResult")]
    search_result: Option<ItemBlock>,
    #[serde(rename = "Errors")]
    errors: Option<Vec<ProviderFault>>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemBlock {
    #[serde(rename = "Items", default)]
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ProviderFault {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

/// Parses and normalizes a raw reply into stable product summaries.
///
/// Fails on invalid JSON, on a non-empty provider error list (regardless of
/// HTTP status), or on a non-success status with no error envelope.
pub fn normalize(body: &str, status: u16) -> Result<SearchResult, PaapiError> {
    let envelope: ReplyEnvelope =
        serde_json::from_str(body).map_err(PaapiError::MalformedResponse)?;

    if let Some(faults) = &envelope.errors {
        if !faults.is_empty() {
            let joined = faults
                .iter()
                .map(|fault| {
                    format!(
                        "{}: {}",
                        fault.code.as_deref().unwrap_or("UnknownCode"),
                        fault.message.as_deref().unwrap_or("An unknown error occurred")
                    )
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PaapiError::ProviderRejected(joined));
        }
    }

    if !(200..300).contains(&status) {
        return Err(PaapiError::ProviderRejected(format!(
            "provider returned HTTP status {}",
            status
        )));
    }

    let items = envelope.search_result.map(|block| block.items).unwrap_or_default();
    let products: Vec<ProductSummary> = items
        .iter()
        .filter_map(|item| {
            let product = normalize_item(item);
            if product.is_none() {
                warn!("Skipping search item without an ASIN");
            }
            product
        })
        .collect();

    debug!("Normalized {} of {} items", products.len(), items.len());

    Ok(SearchResult { products, request_id: envelope.request_id })
}

/// Maps one reply item; items without an ASIN are skipped.
fn normalize_item(item: &Value) -> Option<ProductSummary> {
    let asin = item.get("ASIN").and_then(Value::as_str)?.to_string();

    let title =
        str_at(item, "/ItemInfo/Title/DisplayValue").unwrap_or(asin.as_str()).to_string();

    Some(ProductSummary {
        title,
        detail_page_url: str_at(item, "/DetailPageURL").map(String::from),
        price: normalize_price(item),
        rating: coerce_number(item.pointer("/CustomerReviews/StarRating"))
            .map(|stars| stars.clamp(0.0, 5.0)),
        total_reviews: review_count(item),
        image_url: first_str(
            item,
            &[
                "/Images/Primary/Medium/URL",
                "/Images/Primary/Small/URL",
                "/Images/Primary/Large/URL",
            ],
        )
        .map(String::from),
        asin,
    })
}

/// Price of the first offer listing. A listing without a display string is
/// "no price", not a price with empty fields.
fn normalize_price(item: &Value) -> Option<NormalizedPrice> {
    let listing = item.pointer("/Offers/Listings/0")?;
    let display = str_at(listing, "/Price/DisplayAmount")?.to_string();

    Some(NormalizedPrice {
        display,
        amount: coerce_number(listing.pointer("/Price/Amount")),
        currency: str_at(listing, "/Price/Currency").map(String::from),
    })
}

/// The provider reports both a running total and a per-page count; prefer
/// the total.
fn review_count(item: &Value) -> Option<u32> {
    coerce_number(item.pointer("/CustomerReviews/TotalReviewCount"))
        .or_else(|| coerce_number(item.pointer("/CustomerReviews/Count")))
        .map(|count| count.round().max(0.0) as u32)
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn first_str<'a>(value: &'a Value, pointers: &[&str]) -> Option<&'a str> {
    pointers.iter().find_map(|pointer| str_at(value, pointer))
}

/// Accepts values the provider renders either as JSON numbers or as numeric
/// strings; anything else, and anything non-finite, is discarded.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|number| number.is_finite())
}
