pub mod client;

pub use client::{TranslationClient, Translator};

use crate::json_processor::{read_document, write_document, TreeRecreator};
use crate::utils::{AppConfig, Result};
use std::path::Path;
use tracing::info;

/// End-to-end run: read the source document, recreate it in the target
/// language, then write the destination file.
///
/// The destination is only touched after every translation succeeded; any
/// failure before that leaves it untouched. If writing itself fails, the
/// error says translations already succeeded so a retry of the write step
/// spends no further provider calls.
pub async fn recreate_file<T: Translator>(
    translator: T,
    input: &Path,
    output: &Path,
    target_lang: &str,
    config: &AppConfig,
) -> Result<()> {
    let source = read_document(input)?;

    info!(input = %input.display(), "source document loaded");

    let recreator = TreeRecreator::new(
        translator,
        config.effective_batch_size(),
        config.translation.max_concurrent_requests,
    );
    let recreated = recreator.recreate(&source, target_lang).await?;

    write_document(output, &recreated)?;

    info!(
        output = %output.display(),
        target_lang = %target_lang,
        "recreated document written"
    );

    Ok(())
}
