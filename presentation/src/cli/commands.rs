//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for jokebot
#[derive(Parser, Debug)]
#[command(name = "jokebot")]
#[command(author, version, about = "Interactive joke session in the terminal")]
#[command(long_about = r#"
Jokebot tells short programmer jokes, one at a time, from a menu:

  [n] next joke   [c] change category   [l] change language
  [r] reset history   [q] quit

Any other menu input ends the session, unless --strict is given.

Configuration files are loaded from (in priority order):
1. JOKEBOT_SECTION__KEY    Environment variables
2. --config <path>         Explicit config file
3. ./jokebot.toml          Project-level config
4. ~/.config/jokebot/config.toml   Global config

Example:
  jokebot
  jokebot --category chuck --language es
  jokebot --strict --transcript ~/jokes.jsonl
  jokebot --prompts prompts.yaml --show-prompt joke_teller --var category=chuck
"#)]
pub struct Cli {
    /// Category to start with (neutral, chuck, all)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Language to start with (en, de, es, gl, eu, it)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Re-prompt on unrecognized menu input instead of quitting
    #[arg(long)]
    pub strict: bool,

    /// Append a JSONL transcript of session events to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// YAML prompt file (defaults to [prompts] file, then ./prompts.yaml)
    #[arg(long, value_name = "PATH")]
    pub prompts: Option<PathBuf>,

    /// Print the named prompt, formatted with --var values, and exit
    #[arg(long, value_name = "NAME")]
    pub show_prompt: Option<String>,

    /// Placeholder value for --show-prompt (can be specified multiple times)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub vars: Vec<(String, String)>,
}

/// Parse a `KEY=VALUE` pair
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
