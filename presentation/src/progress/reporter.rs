//! Progress reporting for workflow execution

use colored::Colorize;
use dialectic_application::ProgressNotifier;
use dialectic_domain::{AgentRole, Critique, Mode};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per agent call
///
/// Expert opinions may run concurrently, so spinners are keyed by label.
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<Vec<(String, AgentRole, ProgressBar)>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(Vec::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn mode_display_name(mode: Mode) -> &'static str {
        match mode {
            Mode::Binary => "Binary dialectic",
            Mode::Debate => "Debate",
            Mode::Experts => "Expert consultation",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_workflow_start(&self, mode: Mode) {
        let _ = self.multi.println(format!(
            "{} {}",
            "->".cyan(),
            Self::mode_display_name(mode).bold()
        ));
    }

    fn on_agent_start(&self, role: AgentRole, label: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(label.to_string());
        pb.set_message("thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinners) = self.spinners.lock() {
            spinners.push((label.to_string(), role, pb));
        }
    }

    fn on_agent_complete(&self, role: AgentRole, success: bool) {
        let Ok(mut spinners) = self.spinners.lock() else {
            return;
        };
        // Oldest outstanding call for this role
        if let Some(pos) = spinners.iter().position(|(_, r, _)| *r == role) {
            let (_, _, pb) = spinners.remove(pos);
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.finish_with_message(format!("{}", "failed".red()));
            }
        }
    }

    fn on_critique(&self, critique: &Critique, accepted: bool) {
        let verdict = if accepted {
            "accepted".green()
        } else {
            "refining".yellow()
        };
        let _ = self.multi.println(format!(
            "   critique score {:.2}, {}",
            critique.score, verdict
        ));
    }

    fn on_workflow_complete(&self, mode: Mode) {
        if let Ok(mut spinners) = self.spinners.lock() {
            for (_, _, pb) in spinners.drain(..) {
                pb.finish_and_clear();
            }
        }
        let _ = self.multi.println(format!(
            "{} {} complete",
            "v".green(),
            Self::mode_display_name(mode)
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_workflow_start(&self, mode: Mode) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::mode_display_name(mode).bold()
        );
    }

    fn on_agent_start(&self, _role: AgentRole, label: &str) {
        eprintln!("  .. {}", label);
    }

    fn on_agent_complete(&self, role: AgentRole, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), role);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), role);
        }
    }

    fn on_critique(&self, critique: &Critique, accepted: bool) {
        eprintln!(
            "  critique {:.2} ({})",
            critique.score,
            if accepted { "accepted" } else { "refining" }
        );
    }

    fn on_workflow_complete(&self, _mode: Mode) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinners_are_released() {
        let reporter = ProgressReporter::new();
        reporter.on_workflow_start(Mode::Experts);
        reporter.on_agent_start(AgentRole::Expert, "science expert");
        reporter.on_agent_start(AgentRole::Expert, "humor expert");
        reporter.on_agent_complete(AgentRole::Expert, true);
        assert_eq!(reporter.spinners.lock().unwrap().len(), 1);
        assert_eq!(reporter.spinners.lock().unwrap()[0].0, "humor expert");

        reporter.on_agent_start(AgentRole::Synthesis, "synthesis");
        reporter.on_workflow_complete(Mode::Experts);
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }
}
