use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::view::ViewState;

/// Draw title bar with version and API address
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("Mini URL Shortener", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.controller.base_url().to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Status bar text and style
///
/// 错误优先，其次是本地提示，最后显示上次刷新时间
pub fn status_line(app: &App, state: &ViewState) -> (String, Style) {
    if let Some(error) = &state.error {
        let label = if error.is_validation() {
            "[INVALID]"
        } else {
            "[ERROR]"
        };
        (
            format!("{} {}", label, error.message()),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            app.status_message.clone(),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else if let Some(at) = state.last_refreshed {
        (
            format!("Last refreshed at {}", at.format("%H:%M:%S")),
            Style::default().fg(colors::PRIMARY),
        )
    } else {
        ("Loading...".to_string(), Style::default().fg(colors::WARNING))
    }
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, state: &ViewState, area: Rect) {
    let (status_text, status_style) = status_line(app, state);

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let shortcuts = [
        ("Enter", "Shorten", Color::Green),
        ("Up/Down", "Select", Color::Cyan),
        ("Ctrl+Y", "Copy link", Color::Yellow),
        ("Ctrl+R", "Refresh", Color::Blue),
        ("Ctrl+U", "Clear", Color::Magenta),
        ("Esc", "Quit", Color::Red),
    ];

    let mut spans = Vec::with_capacity(shortcuts.len() * 3);
    for (i, (key, label, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(colors::MUTED),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, area);
}
