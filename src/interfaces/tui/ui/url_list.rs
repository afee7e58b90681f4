use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::view::ViewState;
use crate::view::format::{EMPTY_LIST_TEXT, list_heading, short_link_label, truncate};

fn list_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
}

pub fn draw_url_list(frame: &mut Frame, app: &App, state: &ViewState, area: Rect) {
    let title = list_heading(app.controller.display_limit());

    if state.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                EMPTY_LIST_TEXT,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Type a URL and press ", Style::default().fg(colors::MUTED)),
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " to create the first one",
                    Style::default().fg(colors::MUTED),
                ),
            ]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(list_block(title))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled(
            "Original URL",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Short link",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let base_url = app.controller.base_url();
    let rows: Vec<Row> = state
        .entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Span::styled(
                    truncate(&entry.original_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(colors::LINK),
                ),
                Span::styled(
                    short_link_label(base_url, &entry.short_code),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Percentage(40)])
        .header(header)
        .block(list_block(title))
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ")
        .column_spacing(1);

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}
