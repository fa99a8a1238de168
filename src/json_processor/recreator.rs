use crate::translation::Translator;
use crate::utils::{I18nTranslatorError, Result};
use futures::stream::{self, StreamExt};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, info};

/// A translatable string leaf together with the JSON pointer of its first
/// occurrence in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub pointer: String,
}

/// The unique translatable phrases of a document, in first-seen order.
///
/// Duplicate strings are recorded once, so each distinct phrase is sent to
/// the provider a single time per run.
#[derive(Debug, Default)]
pub struct PhraseBook {
    phrases: Vec<Phrase>,
}

impl PhraseBook {
    pub fn gather(root: &Value) -> Self {
        let mut book = PhraseBook::default();
        let mut seen = std::collections::HashSet::new();
        book.collect(root, String::new(), &mut seen);
        book
    }

    fn collect(&mut self, node: &Value, pointer: String, seen: &mut std::collections::HashSet<String>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let child_pointer = format!("{}/{}", pointer, escape_pointer_token(key));
                    self.collect(child, child_pointer, seen);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    let child_pointer = format!("{}/{}", pointer, index);
                    self.collect(child, child_pointer, seen);
                }
            }
            Value::String(text) => {
                if is_translatable(text) && seen.insert(text.clone()) {
                    self.phrases.push(Phrase {
                        text: text.clone(),
                        pointer,
                    });
                }
            }
            // Null, Bool and Number leaves carry nothing to translate.
            _ => {}
        }
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Empty and whitespace-only strings are passed through instead of being
/// sent to the provider.
fn is_translatable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// JSON pointer token escaping per RFC 6901: `~` becomes `~0`, `/` becomes `~1`.
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Structure-preserving recursive transform over a parsed resource tree.
///
/// `recreate` returns a new tree with the same shape, key order and sequence
/// lengths as the input, in which every translatable string leaf has been
/// replaced by its translation and every other value is carried over
/// unchanged.
pub struct TreeRecreator<T: Translator> {
    translator: T,
    batch_size: usize,
    max_concurrent_requests: usize,
}

impl<T: Translator> TreeRecreator<T> {
    pub fn new(translator: T, batch_size: usize, max_concurrent_requests: usize) -> Self {
        Self {
            translator,
            batch_size: batch_size.max(1),
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    pub async fn recreate(&self, root: &Value, target_lang: &str) -> Result<Value> {
        let book = PhraseBook::gather(root);

        if book.is_empty() {
            debug!("no translatable phrases, cloning document as-is");
            return Ok(root.clone());
        }

        info!(
            phrases = book.len(),
            target_lang = %target_lang,
            "translating gathered phrases"
        );

        let translations = self.translate_phrases(book.phrases(), target_lang).await?;

        Ok(apply_translations(root, &translations))
    }

    /// Translates unique phrases in provider-sized batches, with at most
    /// `max_concurrent_requests` batches in flight. Batches are consumed in
    /// index order, so the phrase map is filled deterministically regardless
    /// of completion order; the first failure aborts the run and drops any
    /// in-flight requests.
    async fn translate_phrases(
        &self,
        phrases: &[Phrase],
        target_lang: &str,
    ) -> Result<HashMap<String, String>> {
        let translator = &self.translator;

        let mut batches = stream::iter(phrases.chunks(self.batch_size).map(|batch| {
            let texts: Vec<String> = batch.iter().map(|p| p.text.clone()).collect();
            async move {
                let translated = translator.translate_batch(&texts, target_lang).await;
                (batch, translated)
            }
        }))
        .buffered(self.max_concurrent_requests);

        let mut translations = HashMap::with_capacity(phrases.len());
        let mut batches_done = 0usize;

        while let Some((batch, result)) = batches.next().await {
            let translated = result.map_err(|e| I18nTranslatorError::TranslationFailed {
                pointer: batch[0].pointer.clone(),
                text: batch[0].text.clone(),
                target_lang: target_lang.to_string(),
                source: Box::new(e),
            })?;

            if translated.len() != batch.len() {
                return Err(I18nTranslatorError::BatchSizeMismatch {
                    requested: batch.len(),
                    got: translated.len(),
                });
            }

            for (phrase, translated_text) in batch.iter().zip(translated) {
                translations.insert(phrase.text.clone(), translated_text);
            }

            batches_done += 1;
            debug!(batches_done, "translation batch completed");
        }

        Ok(translations)
    }
}

/// Rebuilds the tree, replacing gathered string leaves with their
/// translations. Key order and sequence order are preserved because maps
/// and arrays are rebuilt by iterating the original in order.
fn apply_translations(node: &Value, translations: &HashMap<String, String>) -> Value {
    match node {
        Value::Object(map) => {
            let rebuilt: Map<String, Value> = map
                .iter()
                .map(|(key, child)| (key.clone(), apply_translations(child, translations)))
                .collect();
            Value::Object(rebuilt)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|child| apply_translations(child, translations))
                .collect(),
        ),
        Value::String(text) => match translations.get(text) {
            Some(translated) => Value::String(translated.clone()),
            // Not gathered: empty or whitespace-only, passes through.
            None => node.clone(),
        },
        other => other.clone(),
    }
}
