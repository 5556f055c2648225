//! CLI entrypoint for postpilot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use postpilot_application::{
    AccountAdapter, AccountClient, ActivityLogger, BotOrchestrator, ContentGenerator,
    NoActivityLogger, NoProgress, ProgressNotifier,
};
use postpilot_infrastructure::{
    ChatCompletionsGenerator, ConfigLoader, FileConfig, FileSessionStore, HttpAccountClient,
    HttpImageGenerator, JsonlActivityLogger, build_http_client,
};
use postpilot_presentation::{BotRepl, Cli, ProgressReporter};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref())?;
    info!("Starting postpilot");

    let api_key_env = &config.text_generation.api_key_env;
    let api_key = match std::env::var(api_key_env) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => bail!("Please set {} in your environment", api_key_env),
    };

    // === Dependency Injection ===
    let http = build_http_client(config.http.timeout_seconds.map(Duration::from_secs))?;

    let client: Arc<dyn AccountClient> = Arc::new(HttpAccountClient::new(
        http.clone(),
        &config.account.base_url,
    )?);
    let store = Arc::new(FileSessionStore::new(
        &config.account.session_file,
        &config.account.settings_file,
    ));

    let activity: Arc<dyn ActivityLogger> = match config
        .logging
        .activity_log
        .as_ref()
        .and_then(JsonlActivityLogger::new)
    {
        Some(logger) => {
            info!("Activity journal: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoActivityLogger),
    };

    let text = Arc::new(ChatCompletionsGenerator::new(
        http.clone(),
        &config.text_generation.base_url,
        api_key,
        config.text_generation.model.clone(),
    ));
    let image = Arc::new(HttpImageGenerator::new(
        http,
        &config.image_generation.base_url,
        config.image_generation.file_suffix.clone(),
    )?);

    let progress: Arc<dyn ProgressNotifier> = if cli.quiet || !config.repl.show_progress {
        Arc::new(NoProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let account = AccountAdapter::new(client, store).with_activity_logger(activity.clone());
    let orchestrator = BotOrchestrator::new(account, ContentGenerator::new(text, image))
        .with_progress(progress)
        .with_activity_logger(activity);

    let mut repl = BotRepl::new(orchestrator)
        .with_history_file(config.repl.history_file.as_deref())
        .with_startup_login(cli.username);

    repl.run().await?;
    Ok(())
}

/// Console logging filtered by `-v`, plus an optional daily-rotated log file.
///
/// `RUST_LOG` overrides the verbosity flag. The returned guard flushes the
/// file writer and must live until exit.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("postpilot")
                .filename_suffix("log")
                .max_log_files(14)
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}
