//! Progress notification port
//!
//! Defines the interface for reporting progress while a workflow runs.

use dialectic_domain::{AgentRole, Critique, Mode};

/// Callback for progress updates during a `respond` call
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once the mode is known, before the first agent call
    fn on_workflow_start(&self, mode: Mode);

    /// Called before an agent is invoked; `label` says what it is producing
    fn on_agent_start(&self, role: AgentRole, label: &str);

    /// Called after an agent call returns
    fn on_agent_complete(&self, role: AgentRole, success: bool);

    /// Called for every critique with whether it ended the loop
    fn on_critique(&self, _critique: &Critique, _accepted: bool) {}

    /// Called when the workflow produced its record
    fn on_workflow_complete(&self, mode: Mode);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_workflow_start(&self, _mode: Mode) {}
    fn on_agent_start(&self, _role: AgentRole, _label: &str) {}
    fn on_agent_complete(&self, _role: AgentRole, _success: bool) {}
    fn on_workflow_complete(&self, _mode: Mode) {}
}
