//! Shared fixtures for the TUI unit tests

use std::sync::Arc;

use async_trait::async_trait;

use super::app::App;
use crate::client::UrlApi;
use crate::config::ViewConfig;
use crate::errors::Result;
use crate::models::UrlListing;
use crate::view::ViewController;

/// Backend that always succeeds with an empty collection
pub struct NullApi;

#[async_trait]
impl UrlApi for NullApi {
    async fn list_urls(&self) -> Result<UrlListing> {
        Ok(UrlListing::default())
    }

    async fn shorten(&self, _url: &str) -> Result<()> {
        Ok(())
    }

    fn base_url(&self) -> &str {
        "http://localhost:8080"
    }
}

/// App over a fresh, unmounted controller
pub fn null_app() -> App {
    App::new(Arc::new(ViewController::new(
        Arc::new(NullApi),
        &ViewConfig::default(),
    )))
}
