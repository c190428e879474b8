//! # Actions
//!
//! Everything that can happen in hanyi becomes an `Action`.
//! User types? That's `Action::EditInput(text)`.
//! The service answers? That's `Action::TranslationFinished { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::controller::{self, KeyPress, Ticket};
use crate::core::state::App;
use crate::translation::{TranslateError, TranslationResponse};

pub const STATUS_ONLINE: &str = "服务在线";
pub const STATUS_UNREACHABLE: &str = "服务不可达";

#[derive(Debug)]
pub enum Action {
    /// Input text replaced by the editor's current buffer.
    EditInput(String),
    /// Submit control activated.
    Submit,
    /// A modified key chord; only Ctrl+Enter does anything.
    Shortcut(KeyPress),
    /// A spawned request settled.
    TranslationFinished {
        request_id: u64,
        outcome: Result<TranslationResponse, TranslateError>,
    },
    /// Startup health probe settled.
    HealthChecked(Result<(), TranslateError>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the translation for this ticket and report back.
    SpawnRequest(Ticket),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditInput(text) => {
            app.input = text;
            // An edit dismisses a stale error; the last translation stays.
            if !app.is_loading && !app.error_message.is_empty() {
                app.error_message.clear();
            }
            Effect::None
        }
        Action::Submit => match controller::begin_submit(app) {
            Some(ticket) => Effect::SpawnRequest(ticket),
            None => Effect::None,
        },
        Action::Shortcut(key) => {
            if key.is_submit() {
                update(app, Action::Submit)
            } else {
                debug!("Unbound shortcut: {:?}", key);
                Effect::None
            }
        }
        Action::TranslationFinished {
            request_id,
            outcome,
        } => {
            controller::finish_submit(app, request_id, outcome);
            Effect::None
        }
        Action::HealthChecked(result) => {
            match result {
                Ok(()) => {
                    info!("Translation service is reachable");
                    app.status_message = STATUS_ONLINE.to_string();
                }
                Err(e) => {
                    warn!("Health check failed: {}", e);
                    app.status_message = STATUS_UNREACHABLE.to_string();
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
