pub mod client;
pub mod provider;
pub mod types;

pub use client::HttpTranslator;
pub use provider::{TranslateError, Translator};
pub use types::{TranslateRequest, TranslationResponse};
