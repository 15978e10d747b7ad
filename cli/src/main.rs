//! CLI entrypoint for Jokebot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use jokebot_application::{
    PromptStore, SessionConfig, SessionController, SessionLogger, UnknownChoicePolicy,
};
use jokebot_domain::{Category, ConfigIssue, Language};
use jokebot_infrastructure::{
    BuiltinJokeSource, ConfigLoader, FileConfig, JsonlSessionLogger, YamlPromptStore,
    format_prompt,
};
use jokebot_presentation::{Cli, ConsoleFormatter, ConsoleView, LineReader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Load Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting Jokebot");
    report_issues(&config.validate());

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if let Some(name) = &cli.show_prompt {
        return show_prompt(&cli, &config, name);
    }

    let session_config = build_session_config(&cli, &config)?;

    // === Dependency Injection ===
    let source = Arc::new(BuiltinJokeSource::new());
    let input = LineReader::stdio();
    let view = ConsoleView::new();

    let transcript = cli
        .transcript
        .clone()
        .or_else(|| config.session.transcript.as_ref().map(PathBuf::from));

    let mut controller = SessionController::new(source, input, &view, session_config);
    if let Some(path) = transcript {
        match JsonlSessionLogger::new(&path) {
            Some(logger) => {
                info!("Writing session transcript to {}", path.display());
                let logger: Arc<dyn SessionLogger> = Arc::new(logger);
                controller = controller.with_logger(logger);
            }
            None => warn!("Continuing without a transcript"),
        }
    }

    print!("{}", ConsoleFormatter::welcome());
    let summary = controller.run();
    print!("{}", ConsoleFormatter::summary(&summary));

    Ok(())
}

/// Console logging by verbosity, plus an optional log file
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let Some(log_file) = log_file else {
        tracing_subscriber::registry().with(console_layer).init();
        return Ok(None);
    };

    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", log_file))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        warn!("{}", issue.message);
    }
}

/// Merge CLI flags over the file configuration
fn build_session_config(cli: &Cli, config: &FileConfig) -> Result<SessionConfig> {
    let mut session = config.session.to_session_config();

    if let Some(category) = &cli.category {
        session.category = category
            .parse::<Category>()
            .with_context(|| format!("Invalid --category '{}'", category))?;
    }
    if let Some(language) = &cli.language {
        session.language = language
            .parse::<Language>()
            .with_context(|| format!("Invalid --language '{}'", language))?;
    }
    if cli.strict {
        session.unknown_choice = UnknownChoicePolicy::Reprompt;
    }

    Ok(session)
}

/// Print a prompt from the prompt file, formatted with `--var` values
fn show_prompt(cli: &Cli, config: &FileConfig, name: &str) -> Result<()> {
    let path = cli
        .prompts
        .clone()
        .or_else(|| config.prompts.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(YamlPromptStore::default_path);

    let store = YamlPromptStore::load(&path)?;
    let messages = match store.get_prompt(name) {
        Ok(messages) => messages,
        Err(e) if e.is_not_found() => {
            bail!(
                "{}\nAvailable prompts: {}",
                e,
                store.prompt_names().join(", ")
            );
        }
        Err(e) => return Err(e.into()),
    };

    let vars: HashMap<String, String> = cli.vars.iter().cloned().collect();
    let formatted = format_prompt(&messages, &vars)
        .with_context(|| format!("Failed to format prompt '{}'", name))?;

    print!("{}", ConsoleFormatter::prompt(name, &formatted));
    Ok(())
}
