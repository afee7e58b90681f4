//! View state owned by the controller

use chrono::{DateTime, Local};

use crate::errors::{RequestOrigin, ViewError};
use crate::models::{UrlEntry, UrlListing};

/// Everything the screen renders
///
/// `entries` never exceeds the configured display limit; `total_count` is the
/// server's figure, not `entries.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub input_value: String,
    pub entries: Vec<UrlEntry>,
    pub total_count: u64,
    pub error: Option<ViewError>,
    pub last_refreshed: Option<DateTime<Local>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh server listing
    pub(crate) fn apply_listing(&mut self, listing: &UrlListing, display_limit: usize) {
        self.entries = listing.newest_first(display_limit);
        self.total_count = listing.total_count;
        self.last_refreshed = Some(Local::now());

        // 成功刷新只清除由刷新产生的错误
        if self
            .error
            .as_ref()
            .is_some_and(|e| e.origin() == Some(RequestOrigin::Fetch))
        {
            self.error = None;
        }
    }

    pub(crate) fn set_error(&mut self, error: ViewError) {
        self.error = Some(error);
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
