//! CLI entrypoint for Creature Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::{GameController, GenerateRoundUseCase, ScoreStore};
use quiz_domain::{ConversionPanel, UnitCategory};
use quiz_infrastructure::{
    ConfigLoader, FileConfig, InMemoryScoreStore, JsonFileScoreStore, PokeApiLookup,
};
use quiz_presentation::{
    Cli, Command, ConsoleFormatter, GameRepl, OutputConfig, ProgressReporter, RoundIndicator,
    SimpleProgress,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    let output = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress,
    };
    output.apply_color();

    match cli.resolved_command() {
        Command::Play => play(&cli, &config, &output).await,
        Command::Convert {
            value,
            category,
            from,
            to,
        } => convert(&value, category.into(), from.as_deref(), to.as_deref()),
        Command::Units { category } => {
            let categories = match category {
                Some(category) => vec![UnitCategory::from(category)],
                None => UnitCategory::all().to_vec(),
            };
            println!("{}", ConsoleFormatter::units(&categories));
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over `-v`. With a log file configured, output goes there
/// through a non-blocking writer so it never interleaves with the game.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

async fn play(cli: &Cli, config: &FileConfig, output: &OutputConfig) -> Result<()> {
    info!("Starting Creature Quiz");

    let settings = config.game_settings();
    let round_seconds = settings.rules.round_seconds;

    // === Dependency Injection ===
    let lookup = Arc::new(PokeApiLookup::new(
        config.lookup.base_url.as_str(),
        config.lookup.timeout(),
        config.lookup.user_agent(),
    )?);

    let mut generator = GenerateRoundUseCase::new(lookup, settings.creature_count);
    if let Some(seed) = cli.seed {
        info!("Using round seed {}", seed);
        generator = generator.with_seed(seed);
    }

    let score_store: Arc<dyn ScoreStore> = if cli.no_persist {
        Arc::new(InMemoryScoreStore::new())
    } else {
        match config.storage.resolved_path() {
            Some(path) => {
                info!("High score file: {}", path.display());
                Arc::new(JsonFileScoreStore::new(path))
            }
            None => {
                warn!("No data directory available; the high score will not be saved");
                Arc::new(InMemoryScoreStore::new())
            }
        }
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let controller = GameController::new(Arc::new(generator), score_store, settings, event_tx);
    let controller_task = tokio::spawn(controller.run(command_rx));

    let indicator: Box<dyn RoundIndicator> = if output.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    GameRepl::new(command_tx, event_rx, round_seconds)
        .with_indicator(indicator)
        .run()
        .await?;

    controller_task.await.context("Game controller task failed")?;
    Ok(())
}

fn convert(value: &str, category: UnitCategory, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let mut panel = ConversionPanel::new(category);
    panel.set_input(value);

    if let Some(unit) = from
        && !panel.set_from(unit)
    {
        bail!(
            "Unknown {} unit '{}'. Available: {}",
            category,
            unit,
            category.units().join(", ")
        );
    }
    if let Some(unit) = to
        && !panel.set_to(unit)
    {
        bail!(
            "Unknown {} unit '{}'. Available: {}",
            category,
            unit,
            category.units().join(", ")
        );
    }

    println!("{}", ConsoleFormatter::conversion(&panel));
    Ok(())
}
