//! One-shot translation from the command line
//!
//! Usage:
//!   cargo run --bin translate -- English French "Hello there"
//!   cargo run --bin translate -- --list
//!
//! Optional:
//! - TRANSLATE_API_URL (defaults to the public Google endpoint)
//! - TRANSLATE_TIMEOUT_SECS (no timeout when unset)

use anyhow::{bail, Result};
use multi_language_translator::{
    config::Config, google::GoogleTranslator, i18n::LanguageCatalog,
    translation::TranslationRequestHandler,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multi_language_translator=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--list") {
        for entry in LanguageCatalog::get().entries() {
            println!("{}\t{}", entry.name, entry.code);
        }
        return Ok(());
    }

    if args.len() < 3 {
        bail!("Usage: translate <SOURCE> <TARGET> <TEXT...> | translate --list");
    }

    let config = Config::from_env()?;
    let provider = GoogleTranslator::from_config(&config)?;
    let handler = TranslationRequestHandler::new(Arc::new(provider));

    let text = args[2..].join(" ");
    let result = handler.handle(&text, &args[0], &args[1]).await;

    match result.translated_text() {
        Some(translated) => {
            println!("{}", translated);
            Ok(())
        }
        None => {
            eprintln!("{}", result.display_message());
            std::process::exit(1);
        }
    }
}
