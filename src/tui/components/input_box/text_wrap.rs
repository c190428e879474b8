//! Pure text wrapping utilities and dimensional constants for the InputBox.
//!
//! Widths are terminal columns, not chars: CJK characters occupy two.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 6;
/// Minimum content lines, so the box reads as a text area when empty
pub(super) const MIN_VISIBLE_LINES: u16 = 3;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text, accounting for trailing newlines
/// that textwrap may not represent as empty lines.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Byte offset in `text` where each wrapped line starts.
///
/// textwrap hands back slices of its input, so a line's start is its pointer
/// distance from `text`. This accounts for the spaces dropped at soft wraps,
/// which line lengths alone do not.
pub(super) fn line_starts(text: &str, lines: &[Cow<'_, str>]) -> Vec<usize> {
    let base = text.as_ptr() as usize;
    let mut prev_end = 0;
    lines
        .iter()
        .map(|line| {
            let ptr = line.as_ptr() as usize;
            let start = match line {
                Cow::Borrowed(_) if ptr >= base && ptr + line.len() <= base + text.len() => {
                    ptr - base
                }
                _ => prev_end,
            };
            prev_end = (start + line.len()).min(text.len());
            floor_char_boundary(text, start.min(text.len()))
        })
        .collect()
}

/// Largest char boundary in `text` at or before `pos`.
pub(super) fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Terminal columns occupied by `text`.
pub(super) fn display_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text) as u16
}

/// Byte offset in `line` of the last char boundary whose prefix fits in
/// `columns` terminal columns.
pub(super) fn byte_at_column(line: &str, columns: u16) -> usize {
    let mut used = 0u16;
    for (i, c) in line.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
        if used + w > columns {
            return i;
        }
        used += w;
    }
    line.len()
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
