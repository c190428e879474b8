//! Wire types for the translation service.
//!
//! ```text
//! POST /translate   {"text": "你好世界"}
//! 200 OK            {"translation": "Hello world", "keywords": ["你好", "世界", ""]}
//! ```

use serde::{Deserialize, Serialize};

/// Request body sent to the translation endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
}

/// Successful response body.
///
/// `keywords` may be missing or `null`; both mean "no keywords".
/// Entries are kept verbatim, including blanks the service uses as padding.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TranslationResponse {
    pub translation: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl TranslationResponse {
    pub fn new(translation: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            translation: translation.into(),
            keywords: Some(keywords),
        }
    }

    /// Splits into translation and keyword list, with absent keywords as empty.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.translation, self.keywords.unwrap_or_default())
    }
}
