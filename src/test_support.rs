//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::state::App;
use crate::translation::{TranslateError, TranslationResponse, Translator};

/// Records the texts a translator was asked to translate.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last_text(&self) -> Option<String> {
        self.0.lock().unwrap().last().cloned()
    }

    fn record(&self, text: &str) {
        self.0.lock().unwrap().push(text.to_string());
    }
}

/// Returns the same canned outcome for every call.
pub struct ScriptedTranslator {
    outcome: Result<TranslationResponse, TranslateError>,
    calls: CallLog,
}

impl ScriptedTranslator {
    pub fn ok(response: TranslationResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: CallLog::default(),
        }
    }

    pub fn err(error: TranslateError) -> Self {
        Self {
            outcome: Err(error),
            calls: CallLog::default(),
        }
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn translate(&self, text: &str) -> Result<TranslationResponse, TranslateError> {
        self.calls.record(text);
        self.outcome.clone()
    }
}

/// Panics instead of answering.
pub struct PanickingTranslator;

#[async_trait]
impl Translator for PanickingTranslator {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn translate(&self, _text: &str) -> Result<TranslationResponse, TranslateError> {
        panic!("translator exploded");
    }
}

/// Never answers.
pub struct PendingTranslator;

#[async_trait]
impl Translator for PendingTranslator {
    fn name(&self) -> &str {
        "pending"
    }

    async fn translate(&self, _text: &str) -> Result<TranslationResponse, TranslateError> {
        futures::future::pending().await
    }
}

/// Creates an App around the given translator.
pub fn app_with(translator: impl Translator + 'static) -> App {
    App::new(Arc::new(translator), "http://test.invalid/translate".to_string())
}

/// Creates a test App whose translator always fails.
pub fn test_app() -> App {
    app_with(ScriptedTranslator::err(TranslateError::Network(
        "no network in tests".to_string(),
    )))
}
