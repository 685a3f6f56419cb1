//! Respond use case
//!
//! Runs one query through one of the three reasoning workflows. Every
//! workflow is a bounded loop over agent calls; the critic's score is the
//! only thing that ends a loop early.

use crate::ports::agent::{Agent, Critic, DialecticAgents, GenerationError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use dialectic_domain::fields::*;
use dialectic_domain::{
    AgentInputs, AgentRole, Critique, DebateEntry, DebateLabel, DebateResult, DialecticResult,
    DomainError, ExpertResult, FieldValues, Mode, Query, RespondOptions, ResponseRecord,
    combine_opinions,
};
use futures::future::try_join_all;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a `respond` call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RespondError {
    #[error("{0}")]
    InvalidMode(DomainError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl RespondError {
    pub fn is_invalid_mode(&self) -> bool {
        matches!(self, RespondError::InvalidMode(_))
    }
}

/// Use case for answering a query with one of the reasoning workflows
pub struct RespondUseCase {
    agents: DialecticAgents,
    logger: Arc<dyn ConversationLogger>,
}

impl RespondUseCase {
    pub fn new(agents: DialecticAgents) -> Self {
        Self {
            agents,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Answer `query` in `mode` with default (no-op) progress
    pub async fn respond(
        &self,
        query: &str,
        mode: &str,
        options: &RespondOptions,
    ) -> Result<ResponseRecord, RespondError> {
        self.respond_with_progress(query, mode, options, &NoProgress)
            .await
    }

    /// Answer `query` in `mode`, reporting each step to `progress`.
    ///
    /// The mode is validated before any agent runs. Options that
    /// don't apply to the selected mode are ignored.
    pub async fn respond_with_progress(
        &self,
        query: &str,
        mode: &str,
        options: &RespondOptions,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResponseRecord, RespondError> {
        let mode: Mode = mode.parse().map_err(RespondError::InvalidMode)?;
        let query = Query::new(query);

        info!("Responding in {} mode", mode);
        progress.on_workflow_start(mode);

        let record = match mode {
            Mode::Binary => ResponseRecord::Binary(
                self.run_binary(&query, options, progress).await?,
            ),
            Mode::Debate => ResponseRecord::Debate(
                self.run_debate(&query, options, progress).await?,
            ),
            Mode::Experts => ResponseRecord::Experts(
                self.run_experts(&query, options, progress).await?,
            ),
        };

        progress.on_workflow_complete(mode);
        self.logger.log(ConversationEvent::new(
            "respond_complete",
            json!({
                "query": query.content(),
                "record": serde_json::to_value(&record).unwrap_or_default(),
            }),
        ));

        Ok(record)
    }

    // ==================== Binary ====================

    /// Thesis, antithesis, synthesis, then critique and refine until accepted
    /// or `max_iterations` critiques have run.
    pub async fn run_binary(
        &self,
        query: &Query,
        options: &RespondOptions,
        progress: &dyn ProgressNotifier,
    ) -> Result<DialecticResult, GenerationError> {
        let q = query.content();
        let agents = &self.agents;

        let thesis = self
            .call(&*agents.thesis, "thesis", inputs(q), progress)
            .await?;
        let mut antithesis = self
            .call(
                &*agents.antithesis,
                "antithesis",
                inputs(q).with(THESIS, &thesis),
                progress,
            )
            .await?;
        let mut synthesis = self
            .call(
                &*agents.synthesis,
                "synthesis",
                inputs(q)
                    .with(THESIS, &thesis)
                    .with(ANTITHESIS, &antithesis),
                progress,
            )
            .await?;

        let mut critiques = Vec::new();
        for iteration in 1..=options.max_iterations {
            let critique = self
                .critique(
                    inputs(q)
                        .with(THESIS, &thesis)
                        .with(ANTITHESIS, &antithesis)
                        .with(SYNTHESIS, &synthesis),
                    options.acceptance_threshold,
                    iteration,
                    progress,
                )
                .await?;
            let accepted = critique.meets(options.acceptance_threshold);
            let feedback = format!("{}\nCritique: {}", thesis, critique.text);
            critiques.push(critique);
            if accepted {
                break;
            }

            antithesis = self
                .call(
                    &*agents.antithesis,
                    "refined antithesis",
                    inputs(q).with(THESIS, feedback),
                    progress,
                )
                .await?;
            synthesis = self
                .call(
                    &*agents.synthesis,
                    "refined synthesis",
                    inputs(q)
                        .with(THESIS, &thesis)
                        .with(ANTITHESIS, &antithesis),
                    progress,
                )
                .await?;
        }

        Ok(DialecticResult {
            thesis,
            antithesis,
            synthesis,
            critiques,
        })
    }

    // ==================== Debate ====================

    /// Alternate con and pro rounds from an opening thesis, then synthesize
    /// the whole transcript.
    ///
    /// A round's critique judges the con argument against the current
    /// position; a score at the debate threshold ends the exchange before
    /// that round's rebuttal.
    pub async fn run_debate(
        &self,
        query: &Query,
        options: &RespondOptions,
        progress: &dyn ProgressNotifier,
    ) -> Result<DebateResult, GenerationError> {
        let q = query.content();
        let agents = &self.agents;

        let thesis = self
            .call(&*agents.thesis, "thesis", inputs(q), progress)
            .await?;
        let mut current_position = thesis.clone();
        let mut history = vec![DebateEntry::new(DebateLabel::Thesis, &thesis)];

        for round in 1..=options.max_rounds {
            let con = self
                .call(
                    &*agents.con_debate,
                    &format!("con argument, round {}", round),
                    inputs(q)
                        .with(CURRENT_POSITION, &current_position)
                        .with(SUPPORTING_ARGUMENTS, DebateEntry::join(&history)),
                    progress,
                )
                .await?;
            history.push(DebateEntry::new(DebateLabel::Con(round), &con));

            let critique = self
                .critique(
                    inputs(q)
                        .with(THESIS, &thesis)
                        .with(ANTITHESIS, &con)
                        .with(SYNTHESIS, &current_position),
                    options.debate_threshold,
                    round,
                    progress,
                )
                .await?;
            if critique.meets(options.debate_threshold) {
                break;
            }

            let pro = self
                .call(
                    &*agents.pro_debate,
                    &format!("pro argument, round {}", round),
                    inputs(q)
                        .with(CURRENT_POSITION, &current_position)
                        .with(OPPOSING_ARGUMENTS, &con),
                    progress,
                )
                .await?;
            history.push(DebateEntry::new(DebateLabel::Pro(round), &pro));
            current_position = pro;
        }

        let synthesis = self
            .call(
                &*agents.synthesis,
                "synthesis",
                inputs(q)
                    .with(THESIS, &thesis)
                    .with(ANTITHESIS, DebateEntry::join(&history)),
                progress,
            )
            .await?;

        Ok(DebateResult {
            debate_history: history,
            synthesis,
        })
    }

    // ==================== Experts ====================

    /// Collect one opinion per domain, synthesize them, then critique and
    /// re-opine every domain until accepted or `max_iterations` critiques
    /// have run.
    pub async fn run_experts(
        &self,
        query: &Query,
        options: &RespondOptions,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExpertResult, GenerationError> {
        let q = query.content();
        let domains = options.resolved_domains();

        let mut opinions = self
            .gather_opinions(q, &domains, "", options.parallel_experts, progress)
            .await?;
        let mut combined = combine_opinions(&domains, &opinions);
        let mut synthesis = self.synthesize_opinions(q, &combined, progress).await?;

        for iteration in 1..=options.max_iterations {
            let critique = self
                .critique(
                    inputs(q)
                        .with(THESIS, &combined)
                        .with(ANTITHESIS, "")
                        .with(SYNTHESIS, &synthesis),
                    options.acceptance_threshold,
                    iteration,
                    progress,
                )
                .await?;
            if critique.meets(options.acceptance_threshold) {
                break;
            }

            // Overwrite in place; the key set never changes
            let refined = self
                .gather_opinions(
                    q,
                    &domains,
                    &critique.text,
                    options.parallel_experts,
                    progress,
                )
                .await?;
            opinions.extend(refined);
            combined = combine_opinions(&domains, &opinions);
            synthesis = self.synthesize_opinions(q, &combined, progress).await?;
        }

        Ok(ExpertResult {
            domains,
            expert_opinions: opinions,
            synthesis,
        })
    }

    async fn gather_opinions(
        &self,
        query: &str,
        domains: &[String],
        context: &str,
        parallel: bool,
        progress: &dyn ProgressNotifier,
    ) -> Result<HashMap<String, String>, GenerationError> {
        let pairs = if parallel {
            try_join_all(
                domains
                    .iter()
                    .map(|domain| self.opine(query, domain, context, progress)),
            )
            .await?
        } else {
            let mut pairs = Vec::with_capacity(domains.len());
            for domain in domains {
                pairs.push(self.opine(query, domain, context, progress).await?);
            }
            pairs
        };

        Ok(pairs.into_iter().collect())
    }

    async fn opine(
        &self,
        query: &str,
        domain: &str,
        context: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<(String, String), GenerationError> {
        let opinion = self
            .call(
                &*self.agents.expert,
                &format!("{} opinion", domain),
                inputs(query)
                    .with(EXPERTISE_DOMAIN, domain)
                    .with(CONTEXT, context),
                progress,
            )
            .await?;
        Ok((domain.to_string(), opinion))
    }

    async fn synthesize_opinions(
        &self,
        query: &str,
        combined: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GenerationError> {
        self.call(
            &*self.agents.synthesis,
            "synthesis",
            inputs(query).with(THESIS, combined).with(ANTITHESIS, ""),
            progress,
        )
        .await
    }

    // ==================== Agent Calls ====================

    async fn call(
        &self,
        agent: &dyn Agent,
        label: &str,
        inputs: AgentInputs,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GenerationError> {
        let role = agent.role();
        debug!("Invoking {} agent ({})", role, label);
        progress.on_agent_start(role, label);

        let result = agent.invoke(&inputs).await;
        progress.on_agent_complete(role, result.is_ok());
        let output = result?;

        self.logger.log(ConversationEvent::new(
            "agent_output",
            json!({
                "role": role.as_str(),
                "label": label,
                "output": output,
            }),
        ));
        Ok(output)
    }

    async fn critique(
        &self,
        inputs: AgentInputs,
        threshold: f64,
        iteration: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<Critique, GenerationError> {
        let label = format!("critique {}", iteration);
        progress.on_agent_start(AgentRole::Critic, &label);

        let result = self.agents.critic.critique(&inputs).await;
        progress.on_agent_complete(AgentRole::Critic, result.is_ok());
        let critique = result?;

        let accepted = critique.meets(threshold);
        info!(
            "Critique {}: score {:.2} (threshold {:.2}) -> {}",
            iteration,
            critique.score,
            threshold,
            if accepted { "accept" } else { "refine" }
        );
        progress.on_critique(&critique, accepted);
        self.logger.log(ConversationEvent::new(
            "critique",
            json!({
                "iteration": iteration,
                "text": critique.text,
                "score": critique.score,
                "accepted": accepted,
            }),
        ));

        Ok(critique)
    }
}

fn inputs(query: &str) -> AgentInputs {
    FieldValues::new().with(QUERY, query)
}
