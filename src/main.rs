use anyhow::Context;
use clap::Parser;
use i18n_translator::{recreate_file, AppConfig, TranslationClient};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Recreates an i18n JSON resource file in another language.
///
/// Reads the source file, walks it recursively and writes a new file with
/// the same structure and key order in which every string value has been
/// translated into the target language. Numbers, booleans, nulls and the
/// nesting itself are preserved as-is.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Source resource file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Destination file, written only after all translations succeed
    #[arg(short, long)]
    output: PathBuf,

    /// Target language code, e.g. "de" or "pl"
    #[arg(short, long)]
    target_lang: String,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("i18n_translator=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    dotenv::dotenv().ok();
    let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY")
        .context("GOOGLE_TRANSLATE_API_KEY is not set (a .env file is honored)")?;

    let config = AppConfig::load_or_default(args.config.as_deref());
    let client = TranslationClient::new(api_key, &config)?;

    recreate_file(
        client,
        &args.input,
        &args.output,
        &args.target_lang,
        &config,
    )
    .await?;

    Ok(())
}
