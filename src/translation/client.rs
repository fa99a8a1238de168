use crate::utils::{AppConfig, I18nTranslatorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// The single operation the recreation core needs from a provider.
///
/// Texts and translations are positionally aligned; a batch of one is the
/// plain translate-one-string contract.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_batch(&self, texts: &[String], target_lang: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Google Translate v2 client.
///
/// The API key is injected at construction; nothing here reads the
/// environment, so the core stays testable without a credential.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    max_retries: usize,
}

impl TranslationClient {
    pub fn new(api_key: String, config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api.endpoint.clone(),
            api_key,
            max_retries: config.translation.max_retries,
        })
    }

    async fn call_api(&self, texts: &[String], target_lang: &str) -> Result<Vec<String>> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("target", target_lang.to_string()),
        ];
        for text in texts {
            params.push(("q", text.clone()));
        }

        let response = self.client.post(&self.endpoint).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(I18nTranslatorError::ApiError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let api_response: TranslateResponse = response.json().await?;

        let translations: Vec<String> = api_response
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();

        if translations.len() != texts.len() {
            return Err(I18nTranslatorError::BatchSizeMismatch {
                requested: texts.len(),
                got: translations.len(),
            });
        }

        Ok(translations)
    }
}

#[async_trait]
impl Translator for TranslationClient {
    /// One provider request per batch, retried with exponential backoff.
    /// Retries are scoped to this single call; the caller never re-runs the
    /// whole tree.
    async fn translate_batch(&self, texts: &[String], target_lang: &str) -> Result<Vec<String>> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            match self.call_api(texts, target_lang).await {
                Ok(translations) => return Ok(translations),
                Err(e) => {
                    warn!(attempt, error = %e, "translation API call failed");
                    last_error = Some(e);

                    if attempt < self.max_retries {
                        let delay = Duration::from_secs(2u64.pow(attempt as u32));
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| I18nTranslatorError::ApiError("unknown error".to_string())))
    }
}
