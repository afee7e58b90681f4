// UI submodules
mod common;
mod url_list;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use url_list::draw_url_list;

use super::app::App;
use crate::view::ViewState;
use crate::view::format::total_count_label;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};
use widgets::InputField;

/// Main UI rendering entry point
///
/// Renders from a state snapshot taken once per frame so the polling task
/// never blocks the draw.
pub fn ui(frame: &mut Frame, app: &mut App, state: &ViewState) {
    app.clamp_selection(state.entries.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // URL input
            Constraint::Min(6),    // URL list
            Constraint::Length(1), // Total count
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);

    InputField::new("Long URL", &state.input_value)
        .active(true)
        .placeholder("Enter a long URL")
        .render(frame, chunks[1]);

    draw_url_list(frame, app, state, chunks[2]);

    let count = Paragraph::new(total_count_label(state.total_count))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(count, chunks[3]);

    draw_status_bar(frame, app, state, chunks[4]);
    draw_footer(frame, chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RequestOrigin, ViewError};
    use crate::interfaces::tui::test_support::null_app;
    use crate::models::UrlEntry;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &ViewState) -> String {
        let mut app = null_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, &mut app, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_entries_and_total() {
        let state = ViewState {
            entries: vec![UrlEntry::new("x1", "http://a.com")],
            total_count: 1,
            ..Default::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Shortened URLs (Showing Last 20)"));
        assert!(screen.contains("http://a.com"));
        assert!(screen.contains("localhost:8080/x1"));
        assert!(screen.contains("Total URLs Stored: 1"));
    }

    #[test]
    fn test_renders_empty_list_and_error() {
        let state = ViewState {
            error: Some(ViewError::request(
                RequestOrigin::Fetch,
                "Could not fetch URLs from the server.",
            )),
            ..Default::default()
        };
        let screen = render(&state);
        assert!(screen.contains("No URLs have been shortened yet."));
        assert!(screen.contains("Could not fetch URLs from the server."));
        assert!(screen.contains("Total URLs Stored: 0"));
        assert!(screen.contains("Enter a long URL"));
    }
}
