//! # Footer Component
//!
//! Two muted lines of usage hints at the bottom of the screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const HINTS: [&str; 2] = [
    "提示：输入中文文本后点击翻译按钮，或使用 Ctrl+Enter 快捷键 · Esc 退出",
    "支持长文本翻译，AI 将自动提取3个核心关键词",
];

pub struct Footer;

impl Footer {
    pub const HEIGHT: u16 = HINTS.len() as u16;
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = HINTS.iter().map(|hint| Line::from(*hint)).collect();
        let footer = Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}
