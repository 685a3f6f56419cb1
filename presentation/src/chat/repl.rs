//! REPL (Read-Eval-Print Loop) for interactive queries

use crate::cli::commands::normalize_mode;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::ProgressReporter;
use dialectic_application::{NoProgress, RespondError, RespondUseCase};
use dialectic_domain::{Mode, OutputFormat, RespondOptions};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

const QUERY_PROMPT: &str = "Enter your query: ";
const MODE_PROMPT: &str = "Enter mode (binary/debate/experts): ";

/// Slash commands accepted at the query prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Domains,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        match line {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/domains" => ReplCommand::Domains,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

/// Interactive query REPL
pub struct ChatRepl {
    responder: Arc<RespondUseCase>,
    options: RespondOptions,
    format: OutputFormat,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(responder: Arc<RespondUseCase>, options: RespondOptions) -> Self {
        Self {
            responder,
            options,
            format: OutputFormat::Synthesis,
            show_progress: true,
            history_file: dirs::data_dir().map(|p| p.join("dialectic").join("history.txt")),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let query = match rl.readline(QUERY_PROMPT) {
                Ok(line) => line.trim().to_string(),
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            };

            if query.is_empty() {
                continue;
            }
            if query.eq_ignore_ascii_case("exit") {
                println!("Bye!");
                break;
            }
            if query.starts_with('/') {
                if self.handle_command(ReplCommand::parse(&query)) {
                    break;
                }
                continue;
            }

            let mode = match rl.readline(MODE_PROMPT) {
                Ok(line) => normalize_mode(&line),
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            };

            let _ = rl.add_history_entry(query.as_str());

            println!();
            match self.answer(&query, &mode).await {
                Ok(output) => println!("{}", output),
                Err(e) => eprintln!("Error: {}", e),
            }
            println!();
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Answer one query and render it in the configured format
    pub async fn answer(&self, query: &str, mode: &str) -> Result<String, RespondError> {
        let record = if self.show_progress {
            let progress = ProgressReporter::new();
            self.responder
                .respond_with_progress(query, mode, &self.options, &progress)
                .await?
        } else {
            self.responder
                .respond_with_progress(query, mode, &self.options, &NoProgress)
                .await?
        };
        Ok(ConsoleFormatter.render(self.format, query, &record))
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Dialectic - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_modes();
        println!("Type `exit` or /quit to leave, /help for commands.");
        println!();
    }

    fn print_modes() {
        println!("Modes:");
        for mode in Mode::ALL {
            println!("  {:<8} - {}", mode.as_str(), mode.description());
        }
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: ReplCommand) -> bool {
        match cmd {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_modes();
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /domains         - Show expert domains");
                println!("  /quit, /exit, /q - Exit (or type `exit`)");
                println!();
                false
            }
            ReplCommand::Domains => {
                println!();
                println!("Expert domains:");
                for domain in self.options.resolved_domains() {
                    println!("  - {}", domain);
                }
                println!();
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dialectic_application::{Agent, Critic, DialecticAgents, GenerationError};
    use dialectic_domain::{AgentInputs, AgentRole, Critique};

    struct FixedAgent(AgentRole);

    #[async_trait]
    impl Agent for FixedAgent {
        fn role(&self) -> AgentRole {
            self.0
        }

        async fn invoke(&self, _inputs: &AgentInputs) -> Result<String, GenerationError> {
            Ok(format!("{} text", self.0))
        }
    }

    struct AcceptingCritic;

    #[async_trait]
    impl Critic for AcceptingCritic {
        async fn critique(&self, _inputs: &AgentInputs) -> Result<Critique, GenerationError> {
            Ok(Critique::new("fine", 0.95))
        }
    }

    fn repl() -> ChatRepl {
        let agent = |role| Arc::new(FixedAgent(role));
        let responder = RespondUseCase::new(DialecticAgents {
            thesis: agent(AgentRole::Thesis),
            antithesis: agent(AgentRole::Antithesis),
            synthesis: agent(AgentRole::Synthesis),
            critic: Arc::new(AcceptingCritic),
            pro_debate: agent(AgentRole::ProDebate),
            con_debate: agent(AgentRole::ConDebate),
            expert: agent(AgentRole::Expert),
        });
        ChatRepl::new(Arc::new(responder), RespondOptions::default())
            .with_progress(false)
            .with_history_file(None)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/domains"), ReplCommand::Domains);
        assert_eq!(
            ReplCommand::parse("/models"),
            ReplCommand::Unknown("/models".to_string())
        );
    }

    #[tokio::test]
    async fn test_answer_renders_synthesis() {
        let output = repl().answer("What is justice?", "binary").await.unwrap();
        assert!(output.contains("What is justice?"));
        assert!(output.contains("synthesis text"));
    }

    #[tokio::test]
    async fn test_answer_unknown_mode_is_error() {
        let err = repl().answer("What is justice?", "trinary").await.unwrap_err();
        assert!(err.is_invalid_mode());
        assert!(err.to_string().contains("trinary"));
    }
}
