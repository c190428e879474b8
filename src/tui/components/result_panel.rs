//! # ResultPanel Component
//!
//! Shows the translation and, below it, one chip per visible keyword.
//!
//! ```text
//! ╭ ✔ 翻译结果 ─────────────────────────╮
//! │ Hello world                          │
//! ╰──────────────────────────────────────╯
//! ╭ # 关键词 ───────────────────────────╮
//! │  你好   世界                         │
//! ╰──────────────────────────────────────╯
//! ```
//!
//! The keyword block is omitted when no keyword survives filtering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::view::visible_keywords;
use crate::tui::component::Component;

pub const RESULT_TITLE: &str = " ✔ 翻译结果 ";
pub const KEYWORDS_TITLE: &str = " # 关键词 ";

pub struct ResultPanel<'a> {
    pub translation: &'a str,
    pub keywords: &'a [String],
}

impl<'a> ResultPanel<'a> {
    pub fn new(translation: &'a str, keywords: &'a [String]) -> Self {
        Self {
            translation,
            keywords,
        }
    }

    fn translation_paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.translation)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green))
                    .title(RESULT_TITLE),
            )
    }

    /// `None` when there is nothing to show.
    fn keyword_paragraph(&self) -> Option<Paragraph<'a>> {
        let chip = Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        for keyword in visible_keywords(self.keywords) {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!(" {keyword} "), chip));
        }
        if spans.is_empty() {
            return None;
        }

        Some(
            Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Blue))
                        .title(KEYWORDS_TITLE),
                ),
        )
    }

    /// Rows needed at the given width, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let translation = self.translation_paragraph().line_count(inner) as u16;
        let keywords = self
            .keyword_paragraph()
            .map(|p| p.line_count(inner) as u16)
            .unwrap_or(0);
        translation + keywords
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.width.saturating_sub(2);
        let translation = self.translation_paragraph();
        let translation_height = translation.line_count(inner) as u16;

        match self.keyword_paragraph() {
            Some(keywords) => {
                let [top, bottom] = Layout::vertical([
                    Constraint::Length(translation_height),
                    Constraint::Min(0),
                ])
                .areas(area);
                frame.render_widget(translation, top);
                frame.render_widget(keywords, bottom);
            }
            None => frame.render_widget(translation, area),
        }
    }
}
