//! CLI entrypoint for dialectic
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use dialectic_application::{
    BatchItem, CompileAgentsInput, CompileAgentsUseCase, ConversationLogger, LlmGateway,
    NoProgress, ProgressNotifier, RespondUseCase, RunBatchUseCase,
};
use dialectic_domain::{OutputFormat, RespondOptions, training_examples};
use dialectic_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompatGateway};
use dialectic_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
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
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting dialectic");

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> =
        Arc::new(OpenAiCompatGateway::from_config(&config.provider)?);

    let (models, _) = config.models.to_model_config();
    let mut params = config.compile.to_compile_params();
    if cli.no_compile {
        params.enabled = false;
    }
    let compiled = CompileAgentsUseCase::new(gateway)
        .execute(CompileAgentsInput::new(models, training_examples()).with_params(params));

    let mut responder = RespondUseCase::new(compiled.agents);
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    if let Some(path) = log_path {
        match JsonlConversationLogger::new(&path) {
            Some(logger) => {
                info!("Writing conversation transcript to {}", path.display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                responder = responder.with_conversation_logger(logger);
            }
            None => warn!("Continuing without a conversation transcript"),
        }
    }
    let responder = Arc::new(responder);

    let options = respond_options(&cli, &config);
    let requested_format: Option<OutputFormat> =
        cli.output.map(Into::into).or(config.output.format);
    let format = requested_format.unwrap_or_default();
    let show_progress = !cli.quiet && config.repl.show_progress;

    if let Some(path) = &cli.batch {
        return run_batch(responder, path, &options, format, show_progress).await;
    }

    if cli.wants_repl() {
        let repl = ChatRepl::new(responder, options)
            .with_progress(show_progress)
            .with_format(requested_format.unwrap_or(OutputFormat::Synthesis))
            .with_history_file(config.repl.resolved_history_file());

        repl.run().await?;
        return Ok(());
    }

    let Some(query) = cli.query.as_deref() else {
        bail!("A query is required. Use --chat for interactive mode.");
    };

    let record = if show_progress {
        let progress = ProgressReporter::new();
        responder
            .respond_with_progress(query, &cli.mode, &options, &progress)
            .await?
    } else {
        responder.respond(query, &cli.mode, &options).await?
    };

    println!("{}", ConsoleFormatter.render(format, query, &record));

    Ok(())
}

/// Print config warnings; refuse to start on config errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = Vec::new();
    for issue in &issues {
        if issue.is_error() {
            errors.push(issue.message.clone());
        } else {
            eprintln!("{} {}", "warning:".yellow().bold(), issue.message);
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Config file values, overridden by command-line flags
fn respond_options(cli: &Cli, config: &FileConfig) -> RespondOptions {
    let mut options = config.respond.to_respond_options();
    if let Some(n) = cli.max_iterations {
        options = options.with_max_iterations(n);
    }
    if let Some(n) = cli.max_rounds {
        options = options.with_max_rounds(n);
    }
    if !cli.domains.is_empty() {
        options = options.with_domains(cli.domains.iter().cloned());
    }
    options
}

async fn run_batch(
    responder: Arc<RespondUseCase>,
    path: &Path,
    options: &RespondOptions,
    format: OutputFormat,
    show_progress: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    let items = BatchItem::parse_lines(&text)?;

    // Plain lines for batch runs
    let progress: Box<dyn ProgressNotifier> = if show_progress {
        Box::new(SimpleProgress)
    } else {
        Box::new(NoProgress)
    };

    let report = RunBatchUseCase::new(responder)
        .execute_with_progress(&items, options, progress.as_ref())
        .await?;

    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_batch_json(&report)),
        _ => println!("{}", ConsoleFormatter::format_batch(&report)),
    }

    Ok(())
}
