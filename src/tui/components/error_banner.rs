//! # ErrorBanner Component
//!
//! Red bordered block carrying the current error message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Rows needed at the given width, borders included.
    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width.saturating_sub(2)) as u16
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let style = Style::default().fg(Color::Red);
        Paragraph::new(format!("✖ {}", self.message))
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::TRANSPORT_FAILURE_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_message() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut banner = ErrorBanner::new(TRANSPORT_FAILURE_MESSAGE);
        terminal.draw(|f| banner.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
            .replace(' ', "");
        assert!(text.contains("翻译失败"));
    }

    #[test]
    fn test_height_includes_borders() {
        let banner = ErrorBanner::new("短");
        assert_eq!(banner.height(80), 3);
    }
}
