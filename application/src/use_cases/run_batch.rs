//! Run Batch use case
//!
//! Runs many `(mode, query)` items through the responder one after another
//! and scores each answer with the quality metric. A failed item is recorded
//! and the batch moves on; this is the only place respond errors are not
//! propagated.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::respond::{RespondError, RespondUseCase};
use dialectic_domain::{RespondOptions, ResponseRecord, score_response};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that prevent a batch from running at all
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    #[error("Batch contains no items")]
    Empty,

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// One query to answer in a given mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub mode: String,
    pub query: String,
}

impl BatchItem {
    pub fn new(mode: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            query: query.into(),
        }
    }

    /// Parse `mode<TAB>query` lines. Blank lines and `#` comments are skipped.
    ///
    /// The mode is not validated here; an unknown mode fails its own item
    /// when the batch runs.
    pub fn parse_lines(text: &str) -> Result<Vec<BatchItem>, BatchError> {
        let mut items = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((mode, query)) = line.split_once('\t') else {
                return Err(BatchError::Parse {
                    line: i + 1,
                    message: "expected `mode<TAB>query`".to_string(),
                });
            };
            items.push(BatchItem::new(mode.trim(), query.trim()));
        }
        Ok(items)
    }
}

/// What happened to one batch item
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    Completed {
        record: ResponseRecord,
        /// Quality metric of the final answer
        metric: f64,
    },
    Failed {
        error: RespondError,
    },
}

#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub item: BatchItem,
    pub outcome: BatchOutcome,
}

/// Per-item outcomes in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, BatchOutcome::Completed { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Mean metric over completed items, `None` when nothing completed
    pub fn mean_metric(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .entries
            .iter()
            .filter_map(|e| match e.outcome {
                BatchOutcome::Completed { metric, .. } => Some(metric),
                BatchOutcome::Failed { .. } => None,
            })
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }
}

/// Use case for evaluating a batch of queries
pub struct RunBatchUseCase {
    responder: Arc<RespondUseCase>,
}

impl RunBatchUseCase {
    pub fn new(responder: Arc<RespondUseCase>) -> Self {
        Self { responder }
    }

    pub async fn execute(
        &self,
        items: &[BatchItem],
        options: &RespondOptions,
    ) -> Result<BatchReport, BatchError> {
        self.execute_with_progress(items, options, &NoProgress)
            .await
    }

    pub async fn execute_with_progress(
        &self,
        items: &[BatchItem],
        options: &RespondOptions,
        progress: &dyn ProgressNotifier,
    ) -> Result<BatchReport, BatchError> {
        if items.is_empty() {
            return Err(BatchError::Empty);
        }

        info!("Running batch of {} items", items.len());
        let mut report = BatchReport::default();

        for (i, item) in items.iter().enumerate() {
            let outcome = match self
                .responder
                .respond_with_progress(&item.query, &item.mode, options, progress)
                .await
            {
                Ok(record) => {
                    let metric = score_response(&record);
                    info!("Item {}: {} mode, metric {:.2}", i + 1, item.mode, metric);
                    BatchOutcome::Completed { record, metric }
                }
                Err(error) => {
                    warn!("Item {} failed: {}", i + 1, error);
                    BatchOutcome::Failed { error }
                }
            };
            report.entries.push(BatchEntry {
                item: item.clone(),
                outcome,
            });
        }

        info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent::{Agent, Critic, DialecticAgents, GenerationError};
    use async_trait::async_trait;
    use dialectic_domain::{AgentInputs, AgentRole, Critique};

    struct EchoAgent(AgentRole);

    #[async_trait]
    impl Agent for EchoAgent {
        fn role(&self) -> AgentRole {
            self.0
        }

        async fn invoke(&self, _inputs: &AgentInputs) -> Result<String, GenerationError> {
            Ok(format!("A logical, evidence-based {} that weighs both perspectives", self.0))
        }
    }

    struct ApprovingCritic;

    #[async_trait]
    impl Critic for ApprovingCritic {
        async fn critique(&self, _inputs: &AgentInputs) -> Result<Critique, GenerationError> {
            Ok(Critique::new("fine", 1.0))
        }
    }

    fn use_case() -> RunBatchUseCase {
        let agent = |role| Arc::new(EchoAgent(role));
        let responder = RespondUseCase::new(DialecticAgents {
            thesis: agent(AgentRole::Thesis),
            antithesis: agent(AgentRole::Antithesis),
            synthesis: agent(AgentRole::Synthesis),
            critic: Arc::new(ApprovingCritic),
            pro_debate: agent(AgentRole::ProDebate),
            con_debate: agent(AgentRole::ConDebate),
            expert: agent(AgentRole::Expert),
        });
        RunBatchUseCase::new(Arc::new(responder))
    }

    #[test]
    fn test_parse_lines() {
        let text = "# evaluation set\n\nbinary\tWhat is justice?\n  debate\t Is AI beneficial? \n";
        let items = BatchItem::parse_lines(text).unwrap();
        assert_eq!(
            items,
            vec![
                BatchItem::new("binary", "What is justice?"),
                BatchItem::new("debate", "Is AI beneficial?"),
            ]
        );
    }

    #[test]
    fn test_parse_lines_reports_line_number() {
        let err = BatchItem::parse_lines("binary\tok\nno tab here").unwrap_err();
        assert_eq!(
            err,
            BatchError::Parse {
                line: 2,
                message: "expected `mode<TAB>query`".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failed_item_does_not_stop_batch() {
        let items = vec![
            BatchItem::new("binary", "What is justice?"),
            BatchItem::new("trinary", "What is justice?"),
            BatchItem::new("experts", "Why is the sky blue?"),
        ];

        let report = use_case()
            .execute(&items, &RespondOptions::default())
            .await
            .unwrap();

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        match &report.entries[1].outcome {
            BatchOutcome::Failed { error } => assert!(error.is_invalid_mode()),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(report.mean_metric().unwrap() > 0.1);
    }

    #[tokio::test]
    async fn test_empty_batch_is_an_error() {
        let err = use_case()
            .execute(&[], &RespondOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, BatchError::Empty);
    }
}
