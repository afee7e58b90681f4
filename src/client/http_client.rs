//! ureq-backed implementation of [`UrlApi`]
//!
//! ureq is blocking, so every call runs inside `spawn_blocking`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};
use ureq::Agent;

use super::UrlApi;
use crate::config::ApiConfig;
use crate::errors::{ClientError, Result};
use crate::models::{ErrorBody, ShortenRequest, UrlListing};

const LIST_PATH: &str = "/api/urls";
const SHORTEN_PATH: &str = "/api/shorten";

/// HTTP client for the shortener backend
///
/// `Agent` is `Send + Sync` and pools connections, so one instance is shared
/// by the refresh loop and the UI.
#[derive(Clone)]
pub struct HttpUrlClient {
    agent: Agent,
    base_url: String,
}

impl HttpUrlClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            // 4xx/5xx 也要读取 body 里的 error 字段
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn list_urls_sync(agent: Agent, url: String) -> Result<UrlListing> {
        let mut resp = agent.get(&url).call()?;
        let status = resp.status();
        let body = resp.body_mut().read_to_string()?;

        trace!("GET {} -> {} ({} bytes)", url, status, body.len());

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: ErrorBody::extract(&body),
            });
        }

        Ok(serde_json::from_str::<UrlListing>(&body)?)
    }

    fn shorten_sync(agent: Agent, endpoint: String, long_url: String) -> Result<()> {
        let mut resp = agent
            .post(&endpoint)
            .send_json(&ShortenRequest { url: &long_url })?;
        let status = resp.status();

        trace!("POST {} -> {}", endpoint, status);

        if status.is_success() {
            return Ok(());
        }

        // body 读取失败时仍然返回状态码错误
        let body = resp.body_mut().read_to_string().unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message: ErrorBody::extract(&body),
        })
    }
}

#[async_trait]
impl UrlApi for HttpUrlClient {
    async fn list_urls(&self) -> Result<UrlListing> {
        let agent = self.agent.clone();
        let url = self.endpoint(LIST_PATH);
        debug!("Fetching URL collection from {}", url);

        tokio::task::spawn_blocking(move || Self::list_urls_sync(agent, url)).await?
    }

    async fn shorten(&self, url: &str) -> Result<()> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint(SHORTEN_PATH);
        let long_url = url.to_string();
        debug!("Requesting short code for {}", long_url);

        tokio::task::spawn_blocking(move || Self::shorten_sync(agent, endpoint, long_url)).await?
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
