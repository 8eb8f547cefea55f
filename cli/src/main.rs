//! CLI entrypoint for roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use roundtable_application::{
    ConversationLogger, NoConversationLogger, NoProgress, Orchestrator, RoundProgressNotifier,
};
use roundtable_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiGateway, OpenAiSettings,
};
use roundtable_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleResponseSink, CtrlCGuard, ProgressReporter,
    SimpleProgress, set_color_enabled,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("Configuration sources (lowest to highest priority):");
        for source in ConfigLoader::describe_sources() {
            println!("  {}", source);
        }
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    let (agents, orchestration) = config.resolve().context("Invalid configuration")?;
    let agents = Arc::new(agents);

    set_color_enabled(config.output.color);

    // === Dependency Injection ===
    let settings = OpenAiSettings::from_env(&config.provider)
        .context("No chat completion provider configured")?;
    info!(
        "Using {} model {}",
        settings.kind(),
        settings.model_label()
    );
    let gateway = Arc::new(OpenAiGateway::new(settings)?);

    let mut sink = ConsoleResponseSink::new();
    let progress: Arc<dyn RoundProgressNotifier> = if !config.repl.show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        let reporter = Arc::new(ProgressReporter::new());
        sink = sink.with_progress(reporter.clone());
        reporter
    } else {
        Arc::new(SimpleProgress)
    };

    let logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log {
        Some(path) => {
            let logger = JsonlConversationLogger::open(path)
                .with_context(|| format!("Cannot open conversation log {}", path.display()))?;
            info!("Writing conversation transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let mut orchestrator = Orchestrator::new(gateway, agents.clone(), &orchestration)
        .with_sink(Arc::new(sink))
        .with_progress(progress)
        .with_logger(logger);

    // Single question mode
    if let Some(question) = cli.question.as_deref() {
        let guard = CtrlCGuard::new();
        let report = orchestrator
            .process_turn_with_cancellation(question, guard.token())
            .await;
        if let Some(output) = ConsoleFormatter::report(&report) {
            print!("{}", output);
        }
        if let Some(e) = report.error() {
            bail!("Round ended early: {}", e);
        }
        return Ok(());
    }

    let history_file = config.repl.history_file.as_ref().map(PathBuf::from);
    let mut repl = ChatRepl::new(orchestrator, agents).with_history_file(history_file);
    repl.run().await?;

    Ok(())
}

/// Flags given on the command line win over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(strategy) = cli.strategy {
        config.orchestration.strategy = strategy;
    }
    if let Some(path) = &cli.log_file {
        config.logging.conversation_log = Some(path.clone());
    }
    if cli.no_color {
        config.output.color = false;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }
}
