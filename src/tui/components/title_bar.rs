//! # TitleBar Component
//!
//! Top status line: product name, configured endpoint and the health status.
//!
//! Stateless; all fields are props. The text changes with the props:
//!
//! 1. **Status message**: `"智能翻译助手 · http://host/translate | 服务在线"`
//! 2. **Default**: `"智能翻译助手 · http://host/translate"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "智能翻译助手";

pub struct TitleBar {
    /// Translation endpoint (e.g., "http://localhost:8000/translate")
    pub endpoint: String,
    /// Status message (e.g., "服务在线")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", self.endpoint),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
            .replace(' ', "")
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000/translate".to_string(),
            "服务在线".to_string(),
        );
        let text = render(&mut title_bar);

        assert!(text.contains("智能翻译助手"));
        assert!(text.contains("localhost:8000/translate"));
        assert!(text.contains("|服务在线"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("http://h/translate".to_string(), String::new());
        let text = render(&mut title_bar);

        assert!(text.contains("http://h/translate"));
        assert!(!text.contains('|'));
    }
}
