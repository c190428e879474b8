//! # SubmitButton Component
//!
//! The clickable submit control. Shows a spinner while a request is in
//! flight and is muted whenever submitting would be refused.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const IDLE_LABEL: &str = "[ 开始翻译 ]";
pub const LOADING_LABEL: &str = "翻译中...";

pub struct SubmitButton {
    /// Whether clicking would submit (Prop)
    pub enabled: bool,
    /// Request in flight (Prop)
    pub loading: bool,
    /// Animation frame counter (Prop)
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn new(enabled: bool, loading: bool, spinner_frame: usize) -> Self {
        Self {
            enabled,
            loading,
            spinner_frame,
        }
    }

    fn label(&self) -> String {
        if self.loading {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("[ {glyph} {LOADING_LABEL} ]")
        } else {
            IDLE_LABEL.to_string()
        }
    }

    /// Screen area the label occupies when centered in `area`.
    pub fn hit_area(area: Rect) -> Rect {
        let width = (unicode_width::UnicodeWidthStr::width(IDLE_LABEL) as u16).min(area.width);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height.min(1),
        }
    }

    /// Whether a click at (`column`, `row`) lands on the button.
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        Self::hit_area(area).contains(Position::new(column, row))
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.loading {
            Style::default().fg(Color::Yellow)
        } else if self.enabled {
            Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new(self.label())
            .style(style)
            .alignment(Alignment::Center);
        let line = Rect {
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(button, line);
    }
}
