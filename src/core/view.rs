//! Pure projections over `App` used by the renderer.
//!
//! Nothing here mutates state, so each function can be recomputed on every
//! frame and tested without a terminal.

use crate::core::state::App;

/// Keywords worth rendering: blank and whitespace-only entries are skipped,
/// order is preserved. No cap is applied.
pub fn visible_keywords(keywords: &[String]) -> impl Iterator<Item = &str> + '_ {
    keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| !keyword.trim().is_empty())
}

/// Character count shown beside the input (Unicode scalar values).
pub fn char_count(input: &str) -> usize {
    input.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Error,
}

pub fn request_status(app: &App) -> RequestStatus {
    if app.is_loading {
        RequestStatus::Loading
    } else if !app.error_message.is_empty() {
        RequestStatus::Error
    } else {
        RequestStatus::Idle
    }
}

/// The dominant thing the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Empty,
    Loading,
    Error(&'a str),
    Result { translation: &'a str },
}

pub fn current_banner(app: &App) -> Banner<'_> {
    match request_status(app) {
        RequestStatus::Loading => Banner::Loading,
        RequestStatus::Error => Banner::Error(&app.error_message),
        RequestStatus::Idle if !app.translation.is_empty() => Banner::Result {
            translation: &app.translation,
        },
        RequestStatus::Idle => Banner::Empty,
    }
}

/// Whether the submit control is enabled.
pub fn can_submit(app: &App) -> bool {
    !app.is_loading && !app.input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_visible_keywords_filters_blanks() {
        let keywords = strings(&["greeting", "", " "]);
        assert_eq!(visible_keywords(&keywords).collect::<Vec<_>>(), vec!["greeting"]);
    }

    #[test]
    fn test_visible_keywords_preserves_order_and_no_cap() {
        let keywords = strings(&["人工智能", "\t", "翻译", "关键词", "第四个"]);
        assert_eq!(
            visible_keywords(&keywords).collect::<Vec<_>>(),
            vec!["人工智能", "翻译", "关键词", "第四个"]
        );
    }

    #[test]
    fn test_visible_keywords_keeps_inner_spacing() {
        let keywords = strings(&[" machine learning "]);
        assert_eq!(
            visible_keywords(&keywords).collect::<Vec<_>>(),
            vec![" machine learning "]
        );
    }

    #[test]
    fn test_visible_keywords_empty_list() {
        assert_eq!(visible_keywords(&[]).count(), 0);
    }

    #[test]
    fn test_char_count_counts_characters_not_bytes() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("hello"), 5);
        assert_eq!(char_count("你好世界"), 4);
        assert_eq!(char_count("a\nb"), 3);
    }

    #[test]
    fn test_request_status_derivation() {
        let mut app = test_app();
        assert_eq!(request_status(&app), RequestStatus::Idle);

        app.error_message = "oops".to_string();
        assert_eq!(request_status(&app), RequestStatus::Error);

        app.is_loading = true;
        assert_eq!(request_status(&app), RequestStatus::Loading);
    }

    #[test]
    fn test_current_banner_priority() {
        let mut app = test_app();
        assert_eq!(current_banner(&app), Banner::Empty);

        app.translation = "Hello".to_string();
        assert_eq!(current_banner(&app), Banner::Result { translation: "Hello" });

        app.error_message = "failed".to_string();
        assert_eq!(current_banner(&app), Banner::Error("failed"));

        app.is_loading = true;
        assert_eq!(current_banner(&app), Banner::Loading);
    }

    #[test]
    fn test_can_submit() {
        let mut app = test_app();
        assert!(!can_submit(&app));

        app.input = "  ".to_string();
        assert!(!can_submit(&app));

        app.input = "你好".to_string();
        assert!(can_submit(&app));

        app.is_loading = true;
        assert!(!can_submit(&app));
    }
}
