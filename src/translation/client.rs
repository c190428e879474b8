//! HTTP translator for the `/translate` endpoint.
//!
//! One POST per submission, JSON in and JSON out. The body is read as text
//! first so a malformed payload surfaces as `TranslateError::Parse` rather
//! than a generic transport error.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use crate::translation::{TranslateError, TranslateRequest, TranslationResponse, Translator};

/// Translator backed by a remote HTTP service.
pub struct HttpTranslator {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpTranslator {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TranslateError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TranslateError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Config(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `/health` at the endpoint's origin, e.g. `http://host:8000/health`.
    pub fn health_url(&self) -> Result<Url, TranslateError> {
        self.endpoint
            .join("/health")
            .map_err(|e| TranslateError::Config(e.to_string()))
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    fn name(&self) -> &str {
        "http"
    }

    async fn translate(&self, text: &str) -> Result<TranslationResponse, TranslateError> {
        info!(
            "Translate request: endpoint={}, chars={}",
            self.endpoint,
            text.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&TranslateRequest { text })
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Translate response status: {}", status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Translation API error: {} - {}", status.as_u16(), err_body);
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;
        debug!("Translate response body: {} bytes", body.len());

        serde_json::from_str::<TranslationResponse>(&body)
            .map_err(|e| TranslateError::Parse(e.to_string()))
    }

    async fn health(&self) -> Result<(), TranslateError> {
        let url = self.health_url()?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TranslateError::Api {
                status: status.as_u16(),
                message: "health check failed".to_string(),
            })
        }
    }
}
