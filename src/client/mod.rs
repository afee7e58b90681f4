//! Client layer for the shortener HTTP API
//!
//! The view controller talks to the backend only through [`UrlApi`], so the
//! transport can be swapped for a fake in tests.
//!
//! # Endpoints
//!
//! ```text
//! GET  {base}/api/urls     → { urls: {code: url, ...}, totalCount }
//! POST {base}/api/shorten  ← { url }   → 2xx | { error }
//! ```

mod http_client;

pub use http_client::HttpUrlClient;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::UrlListing;

/// Operations consumed from the shortener backend
#[async_trait]
pub trait UrlApi: Send + Sync {
    /// Fetch the full collection of mappings plus the total count
    async fn list_urls(&self) -> Result<UrlListing>;

    /// Ask the backend to create a short code for `url`
    async fn shorten(&self, url: &str) -> Result<()>;

    /// Base address, used to build redirect links
    fn base_url(&self) -> &str;
}
