//! Output formatter trait

use dialectic_application::BatchReport;
use dialectic_domain::{OutputFormat, ResponseRecord};

/// Trait for rendering responder results
pub trait OutputFormatter {
    /// Every step of the workflow
    fn format(&self, query: &str, record: &ResponseRecord) -> String;

    fn format_json(&self, query: &str, record: &ResponseRecord) -> String;

    /// Final synthesis only (concise output)
    fn format_synthesis_only(&self, query: &str, record: &ResponseRecord) -> String;

    /// Summary table for a batch run
    fn format_batch(&self, report: &BatchReport) -> String;

    /// Dispatch on the configured format
    fn render(&self, format: OutputFormat, query: &str, record: &ResponseRecord) -> String {
        match format {
            OutputFormat::Full => self.format(query, record),
            OutputFormat::Synthesis => self.format_synthesis_only(query, record),
            OutputFormat::Json => self.format_json(query, record),
        }
    }
}
