//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::convert::Infallible;
use std::path::PathBuf;

/// Normalize a user-typed mode name (`" Debate "` becomes `"debate"`)
pub fn normalize_mode(mode: &str) -> String {
    mode.trim().to_lowercase()
}

fn parse_mode(mode: &str) -> Result<String, Infallible> {
    Ok(normalize_mode(mode))
}

/// Output format for responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every intermediate step and critique
    Full,
    /// Only the final synthesis
    Synthesis,
    /// JSON record
    Json,
}

impl From<OutputFormat> for dialectic_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => dialectic_domain::OutputFormat::Full,
            OutputFormat::Synthesis => dialectic_domain::OutputFormat::Synthesis,
            OutputFormat::Json => dialectic_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for dialectic
#[derive(Parser, Debug)]
#[command(name = "dialectic")]
#[command(author, version, about = "Answer questions through thesis, debate, or expert panels")]
#[command(long_about = r#"
Dialectic answers a query with one of three LLM workflows:

  binary   Thesis, antithesis, synthesis, refined until a critic accepts it
  debate   Alternating con/pro rounds closed by a synthesis of the debate
  experts  One opinion per domain merged into a synthesis, refined on critique

Configuration files are loaded from (in priority order):
1. DIALECTIC_* environment variables (e.g. DIALECTIC_RESPOND__MAX_ROUNDS=5)
2. --config <path>       Explicit config file
3. ./dialectic.toml      Project-level config
4. ~/.config/dialectic/config.toml   Global config

The API key is read from $XAI_API_KEY unless [provider] says otherwise.

Example:
  dialectic "What is justice?"
  dialectic --mode debate --max-rounds 2 "Is AI beneficial?"
  dialectic --mode experts -d physics -d poetry "Why is the sky blue?"
  dialectic --batch queries.tsv -o json
"#)]
pub struct Cli {
    /// The query to answer (omit to start the interactive REPL)
    pub query: Option<String>,

    /// Workflow: binary, debate, or experts
    #[arg(short, long, default_value = "binary", value_parser = parse_mode)]
    pub mode: String,

    /// Refinement budget for binary and experts modes
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Number of con/pro rounds in debate mode
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Expert domain (can be specified multiple times)
    #[arg(short, long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub chat: bool,

    /// Evaluate a file of `mode<TAB>query` lines
    #[arg(long, value_name = "FILE", conflicts_with_all = ["query", "chat"])]
    pub batch: Option<PathBuf>,

    /// Output format (defaults to [output] format, then full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of agent outputs and critiques
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Build agents without few-shot demos
    #[arg(long)]
    pub no_compile: bool,
}

impl Cli {
    /// REPL runs when asked for, or when there is nothing else to do
    pub fn wants_repl(&self) -> bool {
        self.chat || (self.query.is_none() && self.batch.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_query_defaults() {
        let cli = Cli::try_parse_from(["dialectic", "What is justice?"]).unwrap();
        assert_eq!(cli.query.as_deref(), Some("What is justice?"));
        assert_eq!(cli.mode, "binary");
        assert!(cli.output.is_none());
        assert!(!cli.wants_repl());
    }

    #[test]
    fn test_repeated_domains() {
        let cli = Cli::try_parse_from([
            "dialectic",
            "--mode",
            "experts",
            "-d",
            "physics",
            "--domain",
            "poetry",
            "-o",
            "json",
            "Why is the sky blue?",
        ])
        .unwrap();
        assert_eq!(cli.domains, vec!["physics", "poetry"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_mode_flag_is_normalized() {
        let cli = Cli::try_parse_from(["dialectic", "--mode", " Debate ", "Is AI beneficial?"])
            .unwrap();
        assert_eq!(cli.mode, "debate");
        assert_eq!(normalize_mode("EXPERTS\n"), "experts");
    }

    #[test]
    fn test_no_query_starts_repl() {
        let cli = Cli::try_parse_from(["dialectic", "-vv"]).unwrap();
        assert!(cli.wants_repl());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_batch_conflicts_with_query() {
        assert!(Cli::try_parse_from(["dialectic", "--batch", "q.tsv", "What?"]).is_err());
        let cli = Cli::try_parse_from(["dialectic", "--batch", "q.tsv"]).unwrap();
        assert!(!cli.wants_repl());
    }
}
