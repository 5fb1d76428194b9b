//! Product Advertising API modules: request building, signing, transport,
//! and response normalization.

pub mod client;
pub mod error;
pub mod marketplace;
pub mod models;
pub mod normalize;
pub mod request;
pub mod sign;
pub mod transport;

pub use client::{Clock, PaapiClient, SystemClock};
pub use error::PaapiError;
pub use marketplace::Marketplace;
pub use models::{NormalizedPrice, ProductSummary, SearchQuery, SearchResult};
pub use transport::{HttpTransport, RawReply, SignedRequest, Transport};
