use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nTranslatorError {
    #[error("failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {path} is not valid JSON: {source}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("translation to {target_lang} failed at {pointer} (\"{text}\")")]
    TranslationFailed {
        pointer: String,
        text: String,
        target_lang: String,
        #[source]
        source: Box<I18nTranslatorError>,
    },

    #[error("translations succeeded but writing output file {path} failed: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("batch size mismatch: requested {requested} translations, got {got}")]
    BatchSizeMismatch { requested: usize, got: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, I18nTranslatorError>;
