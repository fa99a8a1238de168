use async_trait::async_trait;
use i18n_translator::{recreate_file, AppConfig, I18nTranslatorError, Translator};
use i18n_translator::Result as TranslatorResult;
use serde_json::{json, Value};
use std::collections::HashMap;

struct MappingTranslator(HashMap<String, String>);

#[async_trait]
impl Translator for MappingTranslator {
    async fn translate_batch(
        &self,
        texts: &[String],
        _target_lang: &str,
    ) -> TranslatorResult<Vec<String>> {
        Ok(texts
            .iter()
            .map(|t| self.0.get(t).cloned().unwrap_or_else(|| t.clone()))
            .collect())
    }
}

struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate_batch(
        &self,
        _texts: &[String],
        _target_lang: &str,
    ) -> TranslatorResult<Vec<String>> {
        Err(I18nTranslatorError::ApiError(
            "503 service unavailable".to_string(),
        ))
    }
}

#[tokio::test]
async fn recreates_a_file_with_shape_and_key_order_intact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    let output = dir.path().join("de.json");

    std::fs::write(
        &input,
        r#"{"title": "Welcome", "menu": {"file": "File", "edit": "Edit"}, "count": 3}"#,
    )
    .unwrap();

    let mut map = HashMap::new();
    map.insert("Welcome".to_string(), "Willkommen".to_string());
    map.insert("File".to_string(), "Datei".to_string());
    map.insert("Edit".to_string(), "Bearbeiten".to_string());

    recreate_file(
        MappingTranslator(map),
        &input,
        &output,
        "de",
        &AppConfig::default(),
    )
    .await
    .unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({"title": "Willkommen", "menu": {"file": "Datei", "edit": "Bearbeiten"}, "count": 3})
    );

    let top_keys: Vec<_> = written.as_object().unwrap().keys().collect();
    assert_eq!(top_keys, ["title", "menu", "count"]);
    let menu_keys: Vec<_> = written["menu"].as_object().unwrap().keys().collect();
    assert_eq!(menu_keys, ["file", "edit"]);
}

#[tokio::test]
async fn no_output_file_is_produced_when_translation_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    let output = dir.path().join("de.json");

    std::fs::write(&input, r#"{"title": "Welcome"}"#).unwrap();

    let err = recreate_file(
        FailingTranslator,
        &input,
        &output,
        "de",
        &AppConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        I18nTranslatorError::TranslationFailed { .. }
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_input_aborts_before_any_translation() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("de.json");

    let err = recreate_file(
        FailingTranslator,
        &dir.path().join("absent.json"),
        &output,
        "de",
        &AppConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, I18nTranslatorError::InputRead { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn invalid_input_is_reported_as_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    std::fs::write(&input, "{broken").unwrap();

    let err = recreate_file(
        FailingTranslator,
        &input,
        &dir.path().join("de.json"),
        "de",
        &AppConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, I18nTranslatorError::InputParse { .. }));
}
