//! # InputBox Component
//!
//! Multi-line text area for the Chinese source text.
//!
//! ## Responsibilities
//!
//! - Capture text input (Enter inserts a newline; submitting is Ctrl+Enter)
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Show a placeholder while empty and the character count in the border
//!
//! ## State Management
//!
//! The buffer is internal state and is mirrored into `App::input` by the
//! parent whenever `InputEvent::Changed` is emitted. `char_count` and
//! `dimmed` are props. Cursor position and scroll state are encapsulated in
//! `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, MIN_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary,
    prev_char_boundary, wrap_line_count, wrap_options,
};

pub const TITLE: &str = "请输入中文内容";
pub const PLACEHOLDER: &str = "输入需要翻译的中文文本... (Ctrl+Enter 快速翻译)";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Buffer content changed; carries nothing, the parent reads `buffer`.
    Changed,
    /// Cursor moved without changing content.
    Moved,
}

/// Text input component with character counter.
///
/// # Props
///
/// - `char_count`: Current character count (from `core::view::char_count`)
/// - `dimmed`: Render muted while a request is in flight
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position, scroll offset, and cached width (see `CursorState`)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Character count (Prop)
    pub char_count: usize,
    /// Muted styling (Prop)
    pub dimmed: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            char_count: 0,
            dimmed: false,
            cursor: CursorState::new(),
        }
    }

    /// Required height for the current buffer, clamped to
    /// [MIN_VISIBLE_LINES, MAX_VISIBLE_LINES] plus borders.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.clamp(MIN_VISIBLE_LINES, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Visible text based on current scroll offset.
    fn get_visible_text(&self, content_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));

        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    /// Render scrollbar when content exceeds visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let width = inner_width(area.width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines.saturating_sub(MAX_VISIBLE_LINES);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Blue)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(TITLE)
            .title_bottom(Line::from(format!(" {} 字符 ", self.char_count)).alignment(Alignment::Right));

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            let text_style = if self.dimmed {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            Paragraph::new(self.get_visible_text(area.width)).style(text_style)
        };

        frame.render_widget(input.block(block), area);
        self.render_scrollbar(frame, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                Some(InputEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Terminals deliver pasted line breaks as \r or \r\n
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert_str(&normalized);
                Some(InputEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::Moved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::Moved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::Moved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::Moved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(InputEvent::Moved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(InputEvent::Moved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(input: &mut InputBox, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
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
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert_eq!(input.char_count, 0);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        assert_eq!(input.handle_event(&TuiEvent::InputChar('你')), Some(InputEvent::Changed));
        assert_eq!(input.handle_event(&TuiEvent::InputChar('好')), Some(InputEvent::Changed));
        assert_eq!(input.buffer, "你好");

        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some(InputEvent::Changed));
        assert_eq!(input.buffer, "你");
    }

    #[test]
    fn test_backspace_on_empty_is_none() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("你世界".to_string()));
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::InputChar('好'));
        assert_eq!(input.buffer, "你好世界");
    }

    #[test]
    fn test_delete_forward() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("你好".to_string()));
        input.handle_event(&TuiEvent::CursorHome);
        assert_eq!(input.handle_event(&TuiEvent::Delete), Some(InputEvent::Changed));
        assert_eq!(input.buffer, "好");
    }

    #[test]
    fn test_paste_normalizes_carriage_returns() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("一\r\n二\r三".to_string()));
        assert_eq!(input.buffer, "一\n二\n三");
    }

    #[test]
    fn test_cursor_moves_report_moved() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("ab".to_string()));
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), Some(InputEvent::Moved));
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), Some(InputEvent::Moved));
        assert_eq!(input.handle_event(&TuiEvent::CursorRight), None);
    }

    #[test]
    fn test_shortcuts_are_not_consumed() {
        use crate::core::controller::{Key, KeyPress};
        let mut input = InputBox::new();
        let res = input.handle_event(&TuiEvent::Shortcut(KeyPress::new(Key::Enter, true)));
        assert_eq!(res, None);
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_height_has_floor_and_ceiling() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), MIN_VISIBLE_LINES + VERTICAL_OVERHEAD);

        input.buffer = "1\n2\n3\n4\n5\n6\n7\n8\n9".to_string();
        assert_eq!(input.calculate_height(40), MAX_VISIBLE_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_placeholder_and_counter() {
        let mut input = InputBox::new();
        let text = rendered_text(&mut input, 60, 5);
        assert!(text.contains("请输入中文内容"));
        assert!(text.contains("Ctrl+Enter"));
        assert!(text.contains("0字符"));
    }

    #[test]
    fn test_render_shows_buffer_and_count() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("你好世界".to_string()));
        input.char_count = 4;
        let text = rendered_text(&mut input, 60, 5);
        assert!(text.contains("你好世界"));
        assert!(text.contains("4字符"));
        assert!(!text.contains("Ctrl+Enter"));
    }
}
