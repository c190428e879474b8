//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and cached width.
//! Navigation methods take `buffer: &str` explicitly because the text is owned
//! by `InputBox`. Columns are measured in terminal cells so CJK input lines up.

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, byte_at_column, display_width, floor_char_boundary,
    inner_width, line_starts, wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Cached content width from last render (used for cursor movement)
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Move cursor one wrapped line up (`-1`) or down (`1`), keeping the
    /// display column where possible.
    ///
    /// Returns `true` if cursor moved, `false` if already at boundary.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        let starts = line_starts(buffer, &lines);
        let current_line_idx = starts.iter().rposition(|&s| s <= self.pos).unwrap_or(0);
        let current_start = starts[current_line_idx];
        // The cursor may sit on a space dropped by the wrap, past the line's end
        let current_end = (current_start + lines[current_line_idx].len()).min(buffer.len());
        let in_line = self.pos.clamp(current_start, current_end);
        let column = display_width(&buffer[current_start..in_line]);

        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx >= lines.len() - 1 {
                return false;
            }
            current_line_idx + 1
        };

        let target = &lines[target_line_idx];
        let pos = starts[target_line_idx] + byte_at_column(target, column);
        self.pos = floor_char_boundary(buffer, pos);

        true
    }

    /// Calculate which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // Cursor right after a newline that textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Update scroll offset to keep cursor visible within the viewport.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let cursor_line = self.calculate_line(buffer, area.width);

        // Measure from where the cursor's wrapped segment starts in the
        // buffer; textwrap trims the spaces at soft wraps from its lines.
        let text_before_cursor = &buffer[..self.pos];
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];

        let segments = textwrap::wrap(logical_line_to_cursor, wrap_options(width));
        let segment_start = line_starts(logical_line_to_cursor, &segments)
            .last()
            .copied()
            .unwrap_or(0);
        let cursor_col = display_width(&logical_line_to_cursor[segment_start..]);

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        (
            area.x + BORDER_OFFSET + cursor_col,
            area.y + BORDER_OFFSET + visible_line,
        )
    }
}
