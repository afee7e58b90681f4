//! View controller integration tests
//!
//! Drive fetch/submit/mount against a scripted in-memory backend and check
//! the resulting view state and the exact requests issued.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use mini_shortener::client::UrlApi;
use mini_shortener::config::ViewConfig;
use mini_shortener::errors::{ClientError, RequestOrigin, Result, ViewError};
use mini_shortener::models::UrlListing;
use mini_shortener::view::{RequestOutcome, SubmitOutcome, ViewController};

// =============================================================================
// Scripted backend
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List,
    Shorten(String),
}

#[derive(Default)]
struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    list_responses: Mutex<VecDeque<Result<UrlListing>>>,
    shorten_responses: Mutex<VecDeque<Result<()>>>,
    /// When set, list_urls waits for a notification before answering
    list_gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    fn new() -> Self {
        Self::default()
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            list_gate: Some(gate),
            ..Self::default()
        }
    }

    fn push_list(&self, response: Result<UrlListing>) {
        self.list_responses.lock().push_back(response);
    }

    fn push_shorten(&self, response: Result<()>) {
        self.shorten_responses.lock().push_back(response);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }
}

#[async_trait]
impl UrlApi for ScriptedApi {
    async fn list_urls(&self) -> Result<UrlListing> {
        self.calls.lock().push(Call::List);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        let next = self.list_responses.lock().pop_front();
        next.unwrap_or_else(|| Ok(UrlListing::default()))
    }

    async fn shorten(&self, url: &str) -> Result<()> {
        self.calls.lock().push(Call::Shorten(url.to_string()));
        let next = self.shorten_responses.lock().pop_front();
        next.unwrap_or(Ok(()))
    }

    fn base_url(&self) -> &str {
        "http://localhost:8080"
    }
}

fn listing(pairs: &[(&str, &str)], total: u64) -> UrlListing {
    UrlListing {
        urls: pairs
            .iter()
            .map(|(c, u)| (c.to_string(), u.to_string()))
            .collect(),
        total_count: total,
    }
}

fn controller_with(api: Arc<ScriptedApi>) -> Arc<ViewController> {
    Arc::new(ViewController::new(api, &ViewConfig::default()))
}

fn codes(controller: &ViewController) -> Vec<String> {
    controller
        .snapshot()
        .entries
        .iter()
        .map(|e| e.short_code.clone())
        .collect()
}

// =============================================================================
// fetch_urls
// =============================================================================

#[tokio::test]
async fn test_fetch_single_entry() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(&[("x1", "http://a.com")], 1)));
    let controller = controller_with(api.clone());

    assert_eq!(controller.fetch_urls().await, RequestOutcome::Applied);

    let state = controller.snapshot();
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].short_code, "x1");
    assert_eq!(state.entries[0].original_url, "http://a.com");
    assert_eq!(state.total_count, 1);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_fetch_reverses_server_order() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(
        &[("a", "http://a.com"), ("b", "http://b.com"), ("c", "http://c.com")],
        3,
    )));
    let controller = controller_with(api);

    controller.fetch_urls().await;
    assert_eq!(codes(&controller), vec!["c", "b", "a"]);
}

#[tokio::test]
async fn test_fetch_caps_entries_but_keeps_server_total() {
    let pairs: Vec<(String, String)> = (0..57)
        .map(|i| (format!("c{:02}", i), format!("http://site{}.com", i)))
        .collect();
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(UrlListing {
        urls: pairs,
        total_count: 1000,
    }));
    let controller = controller_with(api);

    controller.fetch_urls().await;
    let state = controller.snapshot();
    assert_eq!(state.entries.len(), 20);
    assert_eq!(state.entries[0].short_code, "c56");
    assert_eq!(state.total_count, 1000);
}

#[tokio::test]
async fn test_fetch_respects_configured_display_limit() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(
        &[("a", "http://a.com"), ("b", "http://b.com"), ("c", "http://c.com")],
        3,
    )));
    let config = ViewConfig {
        display_limit: 2,
        ..ViewConfig::default()
    };
    let controller = ViewController::new(api, &config);

    controller.fetch_urls().await;
    assert_eq!(codes(&controller), vec!["c", "b"]);
    assert_eq!(controller.snapshot().total_count, 3);
}

#[tokio::test]
async fn test_fetch_missing_total_count_falls_back_to_zero() {
    let api = Arc::new(ScriptedApi::new());
    let body: UrlListing = serde_json::from_str(r#"{"urls":{"x1":"http://a.com"}}"#).unwrap();
    api.push_list(Ok(body));
    let controller = controller_with(api);

    controller.fetch_urls().await;
    let state = controller.snapshot();
    assert_eq!(state.total_count, 0);
    assert_eq!(state.entries.len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_keeps_stale_entries() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(&[("x1", "http://a.com")], 1)));
    api.push_list(Err(ClientError::Transport("connection refused".into())));
    let controller = controller_with(api);

    controller.fetch_urls().await;
    assert_eq!(controller.fetch_urls().await, RequestOutcome::Failed);

    let state = controller.snapshot();
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.total_count, 1);
    assert_eq!(
        state.error,
        Some(ViewError::request(
            RequestOrigin::Fetch,
            "Could not fetch URLs from the server."
        ))
    );
}

#[tokio::test]
async fn test_successful_fetch_clears_previous_fetch_error() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Err(ClientError::Decode("bad json".into())));
    api.push_list(Ok(listing(&[("x1", "http://a.com")], 1)));
    let controller = controller_with(api);

    controller.fetch_urls().await;
    assert!(controller.snapshot().error.is_some());
    controller.fetch_urls().await;
    assert!(controller.snapshot().error.is_none());
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn test_submit_posts_once_then_fetches_once() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(&[("new1", "https://example.com/long")], 1)));
    let controller = controller_with(api.clone());
    controller.set_input("https://example.com/long");

    let outcome = controller.submit_input().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Created {
            refresh: RequestOutcome::Applied
        }
    );

    assert_eq!(
        api.calls(),
        vec![
            Call::Shorten("https://example.com/long".into()),
            Call::List
        ]
    );
    let state = controller.snapshot();
    assert_eq!(state.input_value, "");
    assert_eq!(state.entries[0].short_code, "new1");
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_submit_posts_input_as_typed() {
    let api = Arc::new(ScriptedApi::new());
    let controller = controller_with(api.clone());

    controller.submit("  https://example.com \n").await;
    // 空白只用于判空，不做修改
    assert_eq!(
        api.calls()[0],
        Call::Shorten("  https://example.com \n".into())
    );
}

#[tokio::test]
async fn test_submit_blank_input_sends_nothing() {
    for input in ["", "   ", "\t\n"] {
        let api = Arc::new(ScriptedApi::new());
        let controller = controller_with(api.clone());
        controller.set_input(input);

        assert_eq!(controller.submit_input().await, SubmitOutcome::Rejected);
        assert!(api.calls().is_empty(), "input {:?} hit the network", input);

        let state = controller.snapshot();
        assert_eq!(state.error, Some(ViewError::validation("Please enter a URL.")));
        assert_eq!(state.input_value, input);
    }
}

#[tokio::test]
async fn test_submit_server_error_message_is_shown_and_input_kept() {
    let api = Arc::new(ScriptedApi::new());
    api.push_shorten(Err(ClientError::Status {
        status: 400,
        message: Some("Invalid URL format".into()),
    }));
    let controller = controller_with(api.clone());
    controller.set_input("not-a-url");

    assert_eq!(controller.submit_input().await, SubmitOutcome::Failed);

    assert_eq!(api.calls(), vec![Call::Shorten("not-a-url".into())]);
    let state = controller.snapshot();
    assert_eq!(state.input_value, "not-a-url");
    assert_eq!(
        state.error,
        Some(ViewError::request(RequestOrigin::Submit, "Invalid URL format"))
    );
}

#[tokio::test]
async fn test_submit_transport_error_uses_fallback_message() {
    let api = Arc::new(ScriptedApi::new());
    api.push_shorten(Err(ClientError::Transport("timed out".into())));
    let controller = controller_with(api);

    controller.submit("https://example.com").await;
    assert_eq!(
        controller.snapshot().error_message(),
        Some("An error occurred while shortening the URL.")
    );
}

#[tokio::test]
async fn test_submit_ok_but_refresh_fails_keeps_previous_list() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(&[("old", "http://old.com")], 1)));
    api.push_list(Err(ClientError::Status {
        status: 500,
        message: None,
    }));
    let controller = controller_with(api);

    controller.fetch_urls().await;
    let outcome = controller.submit("https://example.com").await;
    assert_eq!(
        outcome,
        SubmitOutcome::Created {
            refresh: RequestOutcome::Failed
        }
    );

    let state = controller.snapshot();
    assert_eq!(codes(&controller), vec!["old"]);
    assert_eq!(state.total_count, 1);
    assert_eq!(
        state.error_message(),
        Some("Could not fetch URLs from the server.")
    );
}

#[tokio::test]
async fn test_submit_resets_previous_error() {
    let api = Arc::new(ScriptedApi::new());
    let controller = controller_with(api);

    controller.submit("").await;
    assert!(controller.snapshot().error.is_some());

    controller.submit("https://example.com").await;
    assert!(controller.snapshot().error.is_none());
}

#[tokio::test]
async fn test_poll_does_not_clear_submit_error() {
    let api = Arc::new(ScriptedApi::new());
    api.push_shorten(Err(ClientError::Status {
        status: 409,
        message: Some("Already shortened".into()),
    }));
    let controller = controller_with(api);

    controller.submit("https://example.com").await;
    controller.fetch_urls().await;
    assert_eq!(controller.snapshot().error_message(), Some("Already shortened"));
}

// =============================================================================
// mount / unmount
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_mount_fetches_immediately_then_every_interval() {
    let api = Arc::new(ScriptedApi::new());
    let controller = controller_with(api.clone());

    controller.mount();
    assert!(controller.is_mounted());

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(api.list_calls(), 1);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(api.list_calls(), 2);

    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(api.list_calls(), 4);

    controller.unmount();
    assert!(!controller.is_mounted());

    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert_eq!(api.list_calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_double_mount_keeps_single_timer() {
    let api = Arc::new(ScriptedApi::new());
    let controller = controller_with(api.clone());

    controller.mount();
    controller.mount();
    tokio::time::sleep(Duration::from_millis(5010)).await;
    assert_eq!(api.list_calls(), 2);

    controller.unmount();
}

#[tokio::test]
async fn test_late_response_after_unmount_is_discarded() {
    let gate = Arc::new(Notify::new());
    let api = Arc::new(ScriptedApi::gated(gate.clone()));
    api.push_list(Ok(listing(&[("late", "http://late.com")], 1)));
    let controller = controller_with(api.clone());

    let pending = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.fetch_urls().await })
    };

    // 等待请求发出
    while api.list_calls() == 0 {
        tokio::task::yield_now().await;
    }

    controller.unmount();
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), RequestOutcome::Cancelled);
    let state = controller.snapshot();
    assert!(state.entries.is_empty());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_requests_after_unmount_are_cancelled_until_remount() {
    let api = Arc::new(ScriptedApi::new());
    api.push_list(Ok(listing(&[("x1", "http://a.com")], 1)));
    let controller = controller_with(api.clone());

    controller.mount();
    controller.unmount();
    let calls_before = api.list_calls();

    assert_eq!(controller.fetch_urls().await, RequestOutcome::Cancelled);
    assert_eq!(
        controller.submit("https://example.com").await,
        SubmitOutcome::Cancelled
    );

    controller.mount();
    assert_eq!(controller.fetch_urls().await, RequestOutcome::Applied);
    assert!(api.list_calls() > calls_before);
    controller.unmount();
}
