//! App state for the TUI
//!
//! The URL data lives in the [`ViewController`]; the App only keeps
//! terminal-local state such as the selected row and transient notices.

use std::sync::Arc;

use tracing::debug;

use crate::view::format::short_url;
use crate::view::{ViewController, ViewState};

pub struct App {
    pub controller: Arc<ViewController>,

    // UI state
    pub selected_index: usize,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: Arc<ViewController>) -> Self {
        Self {
            controller,
            selected_index: 0,
            status_message: String::new(),
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Keep the selection inside the current list
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Full redirect URL of the selected entry
    pub fn selected_short_url(&self, state: &ViewState) -> Option<String> {
        state
            .entries
            .get(self.selected_index)
            .map(|entry| short_url(self.controller.base_url(), &entry.short_code))
    }

    /// Submit the input field without blocking the draw loop
    pub fn spawn_submit(&mut self) {
        self.status_message.clear();
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            let outcome = controller.submit_input().await;
            debug!("Submit finished: {:?}", outcome);
        });
    }

    /// Manual refresh outside the polling schedule
    pub fn spawn_refresh(&mut self) {
        self.status_message.clear();
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            controller.fetch_urls().await;
        });
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
