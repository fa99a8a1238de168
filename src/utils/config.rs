use serde::{Deserialize, Serialize};

/// Google Translate v2 accepts at most 128 `q` parameters per request.
pub const PROVIDER_MAX_BATCH: usize = 128;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub translation: TranslationDefaults,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub batch_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationDefaults {
    pub max_concurrent_requests: usize,
    pub max_retries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: "https://translation.googleapis.com/language/translate/v2".to_string(),
                timeout_seconds: 120,
                batch_size: PROVIDER_MAX_BATCH,
            },
            translation: TranslationDefaults {
                max_concurrent_requests: 5,
                max_retries: 3,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::I18nTranslatorError::ConfigError(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::I18nTranslatorError::ConfigError(e.to_string()))
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Batch size actually sent to the provider, never above its limit.
    pub fn effective_batch_size(&self) -> usize {
        self.api.batch_size.clamp(1, PROVIDER_MAX_BATCH)
    }
}
