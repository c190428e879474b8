use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use log::warn;

use crate::core::controller::{Key, KeyPress};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Shortcut(KeyPress),

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => map_event(ev),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Translate a raw crossterm event.
pub fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // With REPORT_EVENT_TYPES enabled, releases arrive too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match (ctrl, key_event.code) {
        (true, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        // Ctrl+Enter, reported directly under the keyboard enhancement protocol
        (true, KeyCode::Enter) => Some(TuiEvent::Shortcut(KeyPress::new(Key::Enter, true))),
        // Ctrl+J is ASCII LF; legacy terminals send it for Ctrl+Enter
        (true, KeyCode::Char('j')) => Some(TuiEvent::Shortcut(KeyPress::new(Key::Enter, true))),
        (true, KeyCode::Char(c)) => Some(TuiEvent::Shortcut(KeyPress::new(Key::Char(c), true))),
        (true, _) => Some(TuiEvent::Shortcut(KeyPress::new(Key::Other, true))),
        (false, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (false, KeyCode::Enter) => Some(TuiEvent::InputChar('\n')),
        (false, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (false, KeyCode::Delete) => Some(TuiEvent::Delete),
        (false, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (false, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (false, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (false, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (false, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (false, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (false, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_enter_is_submit_shortcut() {
        let ev = map_event(key(KeyCode::Enter, KeyModifiers::CONTROL));
        assert_eq!(ev, Some(TuiEvent::Shortcut(KeyPress::new(Key::Enter, true))));
    }

    #[test]
    fn test_ctrl_j_is_submit_shortcut() {
        let ev = map_event(key(KeyCode::Char('j'), KeyModifiers::CONTROL));
        assert_eq!(ev, Some(TuiEvent::Shortcut(KeyPress::new(Key::Enter, true))));
    }

    #[test]
    fn test_plain_enter_inserts_newline() {
        let ev = map_event(key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(ev, Some(TuiEvent::InputChar('\n')));
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let ev = map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ev, Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_other_ctrl_chords_are_unbound_shortcuts() {
        let ev = map_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(ev, Some(TuiEvent::Shortcut(KeyPress::new(Key::Char('s'), true))));
    }

    #[test]
    fn test_shifted_chinese_char_is_input() {
        let ev = map_event(key(KeyCode::Char('你'), KeyModifiers::SHIFT));
        assert_eq!(ev, Some(TuiEvent::InputChar('你')));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(ev), None);
    }

    #[test]
    fn test_left_click_maps_to_mouse_click() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(ev), Some(TuiEvent::MouseClick(4, 7)));
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            map_event(Event::Paste("你好".to_string())),
            Some(TuiEvent::Paste("你好".to_string()))
        );
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
