use std::fmt;

use async_trait::async_trait;

use super::types::TranslationResponse;

/// Errors that can occur while talking to the translation service.
///
/// None of these are shown to the user verbatim; the controller maps every
/// variant to the same generic message and logs the detail.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// Client misconfigured (bad endpoint URL, TLS backend failure).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not valid JSON or lacked `translation`.
    Parse(String),
    /// The request task panicked or was torn down before answering.
    Aborted(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Config(msg) => write!(f, "config error: {msg}"),
            TranslateError::Network(msg) => write!(f, "network error: {msg}"),
            TranslateError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            TranslateError::Parse(msg) => write!(f, "parse error: {msg}"),
            TranslateError::Aborted(msg) => write!(f, "request aborted: {msg}"),
        }
    }
}

impl std::error::Error for TranslateError {}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Sends `text` to the service and returns the parsed response.
    async fn translate(&self, text: &str) -> Result<TranslationResponse, TranslateError>;

    /// Probes service liveness. Translators without a probe report healthy.
    async fn health(&self) -> Result<(), TranslateError> {
        Ok(())
    }
}
