//! # Submission Controller
//!
//! Owns the request lifecycle:
//!
//! ```text
//!            submit (valid)            success
//!   Idle ───────────────────▶ Loading ─────────▶ Success
//!    ▲  ▲                        │                  │
//!    │  │        failure/panic   ▼                  │
//!    │  └──────────────────── Error ◀───────────────┘ (next submit)
//!    └──────────── next edit ────┘
//! ```
//!
//! The lifecycle is split in two halves so it can run either inline
//! (`submit`) or across the TUI event loop (`begin_submit` on the UI thread,
//! the request on a spawned task, `finish_submit` when the result action
//! comes back).

use std::any::Any;
use std::ops::{Deref, DerefMut};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, info, warn};

use crate::core::state::App;
use crate::translation::{TranslateError, TranslationResponse, Translator};

pub const VALIDATION_MESSAGE: &str = "请输入需要翻译的中文内容";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "翻译失败，请检查网络连接或后端服务是否正常运行";

/// An accepted submission: the text to send and the id its result must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// A key chord as seen by the controller, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn new(key: Key, ctrl: bool) -> Self {
        Self { key, ctrl }
    }

    /// Ctrl+Enter.
    pub fn is_submit(&self) -> bool {
        self.key == Key::Enter && self.ctrl
    }
}

/// Validates the current input and, if accepted, moves the app into Loading.
///
/// Returns `None` (and changes nothing but the error message) when the input
/// is blank, and `None` with no change at all while a request is in flight.
pub fn begin_submit(app: &mut App) -> Option<Ticket> {
    if app.is_loading {
        debug!("Submit ignored: request {:?} still in flight", app.in_flight);
        return None;
    }

    if app.input.trim().is_empty() {
        debug!("Submit rejected: input is blank");
        app.error_message = VALIDATION_MESSAGE.to_string();
        return None;
    }

    app.translation.clear();
    app.keywords.clear();
    app.error_message.clear();
    app.is_loading = true;

    app.request_seq += 1;
    app.in_flight = Some(app.request_seq);

    info!(
        "Submitting request {} ({} chars)",
        app.request_seq,
        app.input.chars().count()
    );

    Some(Ticket {
        id: app.request_seq,
        text: app.input.clone(),
    })
}

/// Applies the outcome of request `request_id` and leaves Loading.
///
/// Outcomes for any id other than the in-flight one are dropped.
pub fn finish_submit(
    app: &mut App,
    request_id: u64,
    outcome: Result<TranslationResponse, TranslateError>,
) {
    if app.in_flight != Some(request_id) {
        warn!(
            "Ignoring stale result for request {} (in flight: {:?})",
            request_id, app.in_flight
        );
        return;
    }

    app.in_flight = None;
    app.is_loading = false;

    match outcome {
        Ok(response) => {
            let (translation, keywords) = response.into_parts();
            info!(
                "Request {} succeeded: {} chars, {} keywords",
                request_id,
                translation.chars().count(),
                keywords.len()
            );
            app.translation = translation;
            app.keywords = keywords;
        }
        Err(e) => {
            warn!("Translation error (request {}): {}", request_id, e);
            app.error_message = TRANSPORT_FAILURE_MESSAGE.to_string();
        }
    }
}

/// Runs one translation call, converting a panic inside the translator into
/// `TranslateError::Aborted`.
pub async fn request(
    translator: &dyn Translator,
    text: &str,
) -> Result<TranslationResponse, TranslateError> {
    match AssertUnwindSafe(translator.translate(text)).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            warn!("Translator '{}' panicked: {}", translator.name(), msg);
            Err(TranslateError::Aborted(msg))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "translator panicked".to_string()
    }
}

/// Holds the app while a request is pending; dropping it always leaves Loading.
struct LoadingGuard<'a> {
    app: &'a mut App,
}

impl Deref for LoadingGuard<'_> {
    type Target = App;

    fn deref(&self) -> &App {
        self.app
    }
}

impl DerefMut for LoadingGuard<'_> {
    fn deref_mut(&mut self) -> &mut App {
        self.app
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.app.is_loading {
            debug!("Releasing loading state for abandoned request {:?}", self.app.in_flight);
            self.app.is_loading = false;
            self.app.in_flight = None;
        }
    }
}

/// Submits the current input and waits for the outcome.
pub async fn submit(app: &mut App) {
    let Some(ticket) = begin_submit(app) else {
        return;
    };
    let translator = Arc::clone(&app.translator);
    let mut guard = LoadingGuard { app };

    let outcome = request(translator.as_ref(), &ticket.text).await;
    finish_submit(&mut guard, ticket.id, outcome);
}

/// Ctrl+Enter submits; every other chord is ignored.
pub async fn handle_shortcut(app: &mut App, key: KeyPress) {
    if key.is_submit() {
        submit(app).await;
    }
}
