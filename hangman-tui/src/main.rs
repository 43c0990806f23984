use anyhow::Context;
use clap::Parser;
use hangman_tui::{AppState, Cli, Config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse());

    // Log to a file; the terminal belongs to the UI.
    std::fs::create_dir_all(&config.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "hangman");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Hangman starting up");

    let words = config.load_words().with_context(|| match &config.words_path {
        Some(path) => format!("could not load word list from {}", path.display()),
        None => "could not load built-in word list".to_string(),
    })?;
    tracing::info!(count = words.len(), seeded = config.seed.is_some(), "word list ready");

    let state = AppState::new(words, config.seed, config.theme.clone());
    hangman_tui::ui::run_app(state).await?;

    tracing::info!("Hangman shutting down");
    Ok(())
}
