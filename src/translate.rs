//! Hindi-to-English translation over the Google Translate gtx endpoint
//!
//! Translation failure falls back to the original text and is never
//! surfaced to the user.

use async_trait::async_trait;

use crate::config::TranslateConfig;
use crate::{Error, Result};

/// Default translator endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translates text between two languages.
///
/// On any failure the input text is returned unchanged.
#[async_trait]
pub trait Translate {
    async fn translate(&self, text: &str, source: &str, target: &str) -> String;
}

/// Google Translate gtx client
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a new translator
    #[must_use]
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    async fn request(&self, text: &str, source: &str, target: &str) -> Result<String> {
        tracing::debug!(chars = text.len(), source, target, "starting translation");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Translate(format!("translate API error {status}")));
        }

        let payload: serde_json::Value = response.json().await?;
        parse_translation(&payload)
            .ok_or_else(|| Error::Translate("malformed translation payload".to_string()))
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        match self.request(text, source, target).await {
            Ok(translated) => {
                tracing::info!(translated = %translated, "translation complete");
                translated
            }
            Err(e) => {
                // Fallback to the original text, nothing surfaced
                tracing::debug!(error = %e, "translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}

/// Extract the translated text from the gtx payload.
///
/// The payload's first element is an array of segments whose first
/// element each is a translated chunk; chunks are concatenated.
fn parse_translation(payload: &serde_json::Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;

    let mut out = String::new();
    for segment in segments {
        if let Some(chunk) = segment.get(0).and_then(serde_json::Value::as_str) {
            out.push_str(chunk);
        }
    }

    if out.is_empty() { None } else { Some(out) }
}
