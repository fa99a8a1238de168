pub mod json_processor;
pub mod translation;
pub mod utils;

pub use json_processor::{read_document, write_document, PhraseBook, TreeRecreator};
pub use translation::{recreate_file, TranslationClient, Translator};
pub use utils::{AppConfig, I18nTranslatorError, Result};
