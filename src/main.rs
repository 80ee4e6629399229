use anyhow::{bail, Context, Result};
use quick_translate::{Config, Translator};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quick_translate=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (text, source, target) = match args.as_slice() {
        [text, source, target] => (text, source, target),
        _ => bail!("Usage: quick-translate <text> <source-lang> <target-lang>"),
    };

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Translating {} -> {} via {:?} ({})",
        source, target, config.provider, config.api_url
    );

    let translator = Translator::from_config(&config).context("Failed to build translator")?;
    let translated = translator
        .translate_checked(text, source, target)
        .await
        .context("Translation request rejected")?;

    println!("{}", translated);
    Ok(())
}
