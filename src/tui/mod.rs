//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! `update()` returns `Effect::SpawnRequest(ticket)`; the request runs on a
//! tokio task and comes back through the action channel as
//! `Action::TranslationFinished`, which the loop feeds to `update()` again.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::{self, Ticket};
use crate::core::state::App;
use crate::core::view::can_submit;
use crate::translation::{HttpTranslator, Translator};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, SubmitButton};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    /// Where the submit button was last drawn (for mouse hit testing)
    pub button_area: Rect,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            button_area: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol reports Ctrl+Enter distinctly; terminals
        // without it ignore the request and send Ctrl+J instead
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Build the HTTP translator from a resolved config.
pub fn build_translator(config: &ResolvedConfig) -> std::io::Result<Arc<dyn Translator>> {
    let translator = HttpTranslator::new(&config.endpoint, config.timeout)
        .map_err(std::io::Error::other)?;
    Ok(Arc::new(translator))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let translator = build_translator(&config)?;
    let mut app = App::new(translator, config.endpoint.clone());
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if config.check_health {
        spawn_health_check(&app, tx.clone());
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes, Ctrl+Enter may arrive as Ctrl+J: {}", e);
            None
        }
    };

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the spinner runs, long when idle
        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
                TuiEvent::Shortcut(key) => Some(Action::Shortcut(key)),
                TuiEvent::MouseClick(column, row) => {
                    // A disabled button swallows the click
                    (SubmitButton::contains(tui.button_area, column, row) && can_submit(&app))
                        .then_some(Action::Submit)
                }
                other => match tui.input_box.handle_event(&other) {
                    Some(InputEvent::Changed) => {
                        Some(Action::EditInput(tui.input_box.buffer.clone()))
                    }
                    Some(InputEvent::Moved) | None => None,
                },
            };

            if let Some(action) = action {
                match update(&mut app, action) {
                    Effect::Quit => should_quit = true,
                    Effect::SpawnRequest(ticket) => spawn_request(&app, ticket, tx.clone()),
                    Effect::None => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (request results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest(ticket) => spawn_request(&app, ticket, tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Runs one translation on a tokio task and reports back exactly once.
fn spawn_request(app: &App, ticket: Ticket, tx: mpsc::Sender<Action>) {
    info!("Spawning translation request {}", ticket.id);
    let translator = Arc::clone(&app.translator);

    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = controller::request(translator.as_ref(), &ticket.text).await;
        debug!(
            "Request {} settled in {}ms (ok={})",
            ticket.id,
            started.elapsed().as_millis(),
            outcome.is_ok()
        );

        if tx
            .send(Action::TranslationFinished {
                request_id: ticket.id,
                outcome,
            })
            .is_err()
        {
            warn!("Failed to deliver result for request {}: receiver dropped", ticket.id);
        }
    });
}

fn spawn_health_check(app: &App, tx: mpsc::Sender<Action>) {
    let translator = Arc::clone(&app.translator);
    tokio::spawn(async move {
        let result = translator.health().await;
        if tx.send(Action::HealthChecked(result)).is_err() {
            warn!("Failed to deliver health check result: receiver dropped");
        }
    });
}
