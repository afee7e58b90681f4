//! Display strings shared by the TUI and the one-shot CLI

/// Full redirect address for a short code
pub fn short_url(base_url: &str, short_code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_code)
}

/// Short link as displayed: base address without the scheme
pub fn short_link_label(base_url: &str, short_code: &str) -> String {
    let host = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);
    short_url(host, short_code)
}

pub fn total_count_label(total_count: u64) -> String {
    format!("Total URLs Stored: {}", total_count)
}

pub fn list_heading(display_limit: usize) -> String {
    format!("Shortened URLs (Showing Last {})", display_limit)
}

pub const EMPTY_LIST_TEXT: &str = "No URLs have been shortened yet.";

/// Truncate to `max` characters, appending an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}
