//! Console output formatter for responder results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use dialectic_application::{BatchOutcome, BatchReport};
use dialectic_domain::{
    Critique, DebateResult, DialecticResult, ExpertResult, ResponseRecord, preview,
};
use serde::Serialize;

/// Formats responder results for console display
pub struct ConsoleFormatter;

/// One batch row in JSON output
#[derive(Serialize)]
struct BatchRow<'a> {
    mode: &'a str,
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<&'a ResponseRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ConsoleFormatter {
    /// Format every step of the workflow
    pub fn format(query: &str, record: &ResponseRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "Dialectic: {} mode",
            record.mode().as_str()
        )));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));

        match record {
            ResponseRecord::Binary(result) => Self::binary_body(&mut output, result),
            ResponseRecord::Debate(result) => Self::debate_body(&mut output, result),
            ResponseRecord::Experts(result) => Self::experts_body(&mut output, result),
        }

        output.push_str(&Self::section_header("Synthesis"));
        output.push_str(&format!("\n{}\n", record.synthesis()));
        output.push_str(&Self::footer());

        output
    }

    fn binary_body(output: &mut String, result: &DialecticResult) {
        output.push_str(&Self::section_header("Thesis"));
        output.push_str(&format!("\n{}\n", result.thesis));
        output.push_str(&Self::section_header("Antithesis"));
        output.push_str(&format!("\n{}\n", result.antithesis));

        if !result.critiques.is_empty() {
            output.push_str(&Self::section_header("Critiques"));
            for (i, critique) in result.critiques.iter().enumerate() {
                output.push_str(&Self::critique_line(i + 1, critique));
            }
        }
    }

    fn debate_body(output: &mut String, result: &DebateResult) {
        output.push_str(&Self::section_header(&format!(
            "Debate ({} rounds)",
            result.rounds()
        )));
        for entry in &result.debate_history {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", entry.label).yellow().bold(),
                entry.text
            ));
        }
    }

    fn experts_body(output: &mut String, result: &ExpertResult) {
        output.push_str(&Self::section_header("Expert Opinions"));
        for (domain, opinion) in result.opinions_in_order() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", domain).yellow().bold(),
                opinion
            ));
        }
    }

    fn critique_line(n: usize, critique: &Critique) -> String {
        let score = format!("{:.2}", critique.score);
        let score = if critique.score >= 0.8 {
            score.green()
        } else {
            score.yellow()
        };
        format!(
            "\n{} score {}\n{}\n",
            format!("#{}", n).bold(),
            score,
            Self::indent(&critique.text, "  ")
        )
    }

    /// Format as JSON, with the query alongside the record
    pub fn format_json(query: &str, record: &ResponseRecord) -> String {
        let mut value = serde_json::to_value(record).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            map.insert("query".to_string(), serde_json::Value::from(query));
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final synthesis only (concise output)
    pub fn format_synthesis_only(query: &str, record: &ResponseRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), query));
        output.push_str(record.synthesis());
        output.push('\n');

        output
    }

    /// Summary table: one row per item, then totals
    pub fn format_batch(report: &BatchReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Batch Results"));
        output.push('\n');
        output.push_str(&format!(
            "{:>3}  {:<8} {:>6}  {}\n",
            "#".bold(),
            "Mode".bold(),
            "Metric".bold(),
            "Query".bold()
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        for (i, entry) in report.entries.iter().enumerate() {
            let query = preview(&entry.item.query, 40);
            match &entry.outcome {
                BatchOutcome::Completed { metric, .. } => {
                    output.push_str(&format!(
                        "{:>3}  {:<8} {:>6.2}  {}\n",
                        i + 1,
                        entry.item.mode,
                        metric,
                        query
                    ));
                }
                BatchOutcome::Failed { error } => {
                    output.push_str(&format!(
                        "{:>3}  {:<8} {:>6}  {}\n     {}\n",
                        i + 1,
                        entry.item.mode,
                        "FAIL".red().bold(),
                        query,
                        error.to_string().red()
                    ));
                }
            }
        }

        output.push_str(&format!("{}\n", "-".repeat(60)));
        let mean = report
            .mean_metric()
            .map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| "n/a".to_string());
        output.push_str(&format!(
            "{} succeeded, {} failed, mean metric {}\n",
            report.succeeded().to_string().green(),
            report.failed().to_string().red(),
            mean.bold()
        ));

        output
    }

    /// Batch report as a JSON array of rows
    pub fn format_batch_json(report: &BatchReport) -> String {
        let rows: Vec<BatchRow<'_>> = report
            .entries
            .iter()
            .map(|entry| match &entry.outcome {
                BatchOutcome::Completed { record, metric } => BatchRow {
                    mode: &entry.item.mode,
                    query: &entry.item.query,
                    metric: Some(*metric),
                    response: Some(record),
                    error: None,
                },
                BatchOutcome::Failed { error } => BatchRow {
                    mode: &entry.item.mode,
                    query: &entry.item.query,
                    metric: None,
                    response: None,
                    error: Some(error.to_string()),
                },
            })
            .collect();
        serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, query: &str, record: &ResponseRecord) -> String {
        Self::format(query, record)
    }

    fn format_json(&self, query: &str, record: &ResponseRecord) -> String {
        Self::format_json(query, record)
    }

    fn format_synthesis_only(&self, query: &str, record: &ResponseRecord) -> String {
        Self::format_synthesis_only(query, record)
    }

    fn format_batch(&self, report: &BatchReport) -> String {
        Self::format_batch(report)
    }
}
