//! View controller: the two operations and the refresh lifecycle
//!
//! ```text
//!            mount()                     unmount()
//! Unmounted ─────────▶ Mounted(polling) ──────────▶ Unmounted
//!                      │ fetch_urls() now, then every interval
//! ```
//!
//! State lives behind a `parking_lot::Mutex` that is only taken to read or
//! apply a result, never across an `.await`.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, warn};

use super::cancel::{CancelSource, CancelToken};
use super::state::ViewState;
use crate::client::UrlApi;
use crate::config::ViewConfig;
use crate::errors::{
    EMPTY_URL_MESSAGE, FETCH_FAILED_MESSAGE, RequestOrigin, SUBMIT_FAILED_MESSAGE, ViewError,
};

/// Result of one request-driven state update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Response applied to the state
    Applied,
    /// Error recorded in the state
    Failed,
    /// View was torn down; nothing was touched
    Cancelled,
}

/// Result of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, no request sent
    Rejected,
    /// Backend refused or the request failed
    Failed,
    /// Short code created; carries the outcome of the follow-up refresh
    Created { refresh: RequestOutcome },
    Cancelled,
}

struct Lifecycle {
    source: CancelSource,
    refresh_task: Option<JoinHandle<()>>,
}

pub struct ViewController {
    api: Arc<dyn UrlApi>,
    state: Mutex<ViewState>,
    lifecycle: Mutex<Lifecycle>,
    display_limit: usize,
    refresh_interval: Duration,
}

impl ViewController {
    pub fn new(api: Arc<dyn UrlApi>, config: &ViewConfig) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::new()),
            lifecycle: Mutex::new(Lifecycle {
                source: CancelSource::new(),
                refresh_task: None,
            }),
            display_limit: config.display_limit,
            refresh_interval: Duration::from_millis(config.refresh_interval_ms),
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().clone()
    }

    fn token(&self) -> CancelToken {
        self.lifecycle.lock().source.token()
    }

    // ========== Input editing ==========

    pub fn set_input(&self, value: impl Into<String>) {
        self.state.lock().input_value = value.into();
    }

    pub fn push_char(&self, c: char) {
        self.state.lock().input_value.push(c);
    }

    pub fn pop_char(&self) {
        self.state.lock().input_value.pop();
    }

    pub fn clear_input(&self) {
        self.state.lock().input_value.clear();
    }

    // ========== Operations ==========

    /// Refresh the list from `GET /api/urls`
    ///
    /// On failure the previous entries and count stay visible and a fetch
    /// error is recorded.
    pub async fn fetch_urls(&self) -> RequestOutcome {
        let mut token = self.token();

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            res = self.api.list_urls() => Some(res),
        };

        let Some(result) = result.filter(|_| !token.is_cancelled()) else {
            debug!("Discarding URL list response: view unmounted");
            return RequestOutcome::Cancelled;
        };

        match result {
            Ok(listing) => {
                debug!(
                    "Fetched {} mappings (total {})",
                    listing.urls.len(),
                    listing.total_count
                );
                self.state
                    .lock()
                    .apply_listing(&listing, self.display_limit);
                RequestOutcome::Applied
            }
            Err(e) => {
                error!("Could not fetch URLs: {}", e);
                self.state
                    .lock()
                    .set_error(ViewError::request(RequestOrigin::Fetch, FETCH_FAILED_MESSAGE));
                RequestOutcome::Failed
            }
        }
    }

    /// Create a short code for `url`, then refresh the list
    ///
    /// Blank input is rejected locally; anything else is posted as typed.
    /// The input field is cleared only when the backend accepts the URL.
    pub async fn submit(&self, url: &str) -> SubmitOutcome {
        self.state.lock().error = None;

        if url.trim().is_empty() {
            self.state
                .lock()
                .set_error(ViewError::validation(EMPTY_URL_MESSAGE));
            return SubmitOutcome::Rejected;
        }

        let mut token = self.token();

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            res = self.api.shorten(url) => Some(res),
        };

        let Some(result) = result.filter(|_| !token.is_cancelled()) else {
            debug!("Discarding shorten response: view unmounted");
            return SubmitOutcome::Cancelled;
        };

        match result {
            Ok(()) => {
                info!("Shortened {}", url);
                self.clear_input();
                let refresh = self.fetch_urls().await;
                SubmitOutcome::Created { refresh }
            }
            Err(e) => {
                warn!("Shorten request for {} failed: {}", url, e);
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| SUBMIT_FAILED_MESSAGE.to_string());
                self.state
                    .lock()
                    .set_error(ViewError::request(RequestOrigin::Submit, message));
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit whatever is currently in the input field
    pub async fn submit_input(&self) -> SubmitOutcome {
        let url = self.state.lock().input_value.clone();
        self.submit(&url).await
    }

    // ========== Lifecycle ==========

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.lock().refresh_task.is_some()
    }

    /// Start polling: one fetch right away, then one per interval
    ///
    /// Must be called inside a tokio runtime. A second call while mounted is
    /// a no-op.
    pub fn mount(self: &Arc<Self>) {
        let mut lifecycle = self.lifecycle.lock();
        if lifecycle.refresh_task.is_some() {
            debug!("View already mounted, keeping existing refresh task");
            return;
        }

        if lifecycle.source.is_cancelled() {
            lifecycle.source = CancelSource::new();
        }

        let token = lifecycle.source.token();
        let period = self.refresh_interval;
        lifecycle.refresh_task = Some(tokio::spawn(refresh_loop(
            Arc::downgrade(self),
            token,
            period,
        )));

        info!("View mounted, refreshing every {:?}", period);
    }

    /// Stop polling and abandon in-flight requests
    ///
    /// Results that arrive afterwards are dropped without touching state.
    pub fn unmount(&self) {
        let mut lifecycle = self.lifecycle.lock();
        lifecycle.source.cancel();
        if let Some(task) = lifecycle.refresh_task.take() {
            task.abort();
            info!("View unmounted, refresh task stopped");
        }
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        let lifecycle = self.lifecycle.get_mut();
        lifecycle.source.cancel();
        if let Some(task) = lifecycle.refresh_task.take() {
            task.abort();
        }
    }
}

async fn refresh_loop(controller: Weak<ViewController>, mut token: CancelToken, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let Some(controller) = controller.upgrade() else {
                    break;
                };
                controller.fetch_urls().await;
            }
        }
    }

    debug!("Refresh loop exited");
}
