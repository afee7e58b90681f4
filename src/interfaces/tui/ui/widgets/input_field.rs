//! 通用输入框组件
//!
//! 支持激活状态高亮、字符计数、占位符

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Long URL", &state.input_value)
///     .active(true)
///     .placeholder("Enter a long URL")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if !self.value.is_empty() {
            title = format!("{} ({} chars)", title, self.value.chars().count());
        }

        title
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn display_line(&self) -> Line<'a> {
        match (self.value.is_empty(), self.placeholder) {
            (true, Some(placeholder)) => {
                Line::from(Span::styled(placeholder, Style::default().fg(colors::MUTED)))
            }
            _ if self.is_active => Line::from(vec![
                Span::raw(self.value),
                Span::styled("▏", Style::default().fg(colors::PRIMARY)),
            ]),
            _ => Line::from(self.value),
        }
    }

    /// 渲染输入框，区域高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.display_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
