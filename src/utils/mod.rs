pub mod config;
pub mod errors;

pub use config::{AppConfig, PROVIDER_MAX_BATCH};
pub use errors::{I18nTranslatorError, Result};
