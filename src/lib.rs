//! paapi-search - Amazon Product Advertising API 5.0 search CLI
//!
//! A signed, stateless search client over the PA-API SearchItems operation,
//! with defensive normalization of the provider's loosely-typed replies.

pub mod commands;
pub mod config;
pub mod format;
pub mod paapi;

pub use config::Config;
pub use paapi::marketplace::Marketplace;
pub use paapi::models::{NormalizedPrice, ProductSummary, SearchQuery, SearchResult};
pub use paapi::{PaapiClient, PaapiError};
