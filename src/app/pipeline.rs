// soapdump - app/pipeline.rs
//
// Orchestrates one run: read the log, scan, parse responses, correlate,
// and render. Each stage consumes the previous stage's full output.

use crate::core::correlate::{parse_responses_with, parse_transactions_with};
use crate::core::extract::PatternExtractor;
use crate::core::model::TransactionRecord;
use crate::core::report::{self, OutputFormat, SummaryOptions};
use crate::core::{export, scanner};
use crate::platform;
use crate::util::error::{ExportError, Result, SoapDumpError};
use std::io::Write;
use std::path::Path;

/// What a run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// One record per transaction in the given format.
    Records(OutputFormat),
    /// Aggregate statistics.
    Summary,
}

impl Default for ReportMode {
    fn default() -> Self {
        Self::Records(OutputFormat::Raw)
    }
}

/// Everything a run needs besides the input.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub mode: ReportMode,
    pub summary: SummaryOptions,
}

/// Extract and correlate every transaction in `log_text`.
pub fn extract_transactions(log_text: &str) -> Vec<TransactionRecord> {
    let extractor = PatternExtractor::new();

    let requests = scanner::extract_request_fragments(log_text);
    let response_fragments = scanner::extract_response_fragments(log_text);
    tracing::debug!(
        requests = requests.len(),
        responses = response_fragments.len(),
        "Scanned log for payload fragments"
    );

    let responses = parse_responses_with(&extractor, &response_fragments);
    let transactions = parse_transactions_with(&extractor, &requests, &responses);
    tracing::debug!(transactions = transactions.len(), "Correlation complete");
    transactions
}

/// Render `transactions` according to `options`.
pub fn render<W: Write>(
    transactions: &[TransactionRecord],
    options: &PipelineOptions,
    writer: W,
) -> std::result::Result<(), ExportError> {
    match options.mode {
        ReportMode::Records(OutputFormat::Raw) => {
            report::write_raw(transactions, writer)?;
        }
        ReportMode::Records(OutputFormat::Csv) => {
            export::export_csv(transactions, writer)?;
        }
        ReportMode::Records(OutputFormat::Json) => {
            export::export_json(transactions, writer)?;
        }
        ReportMode::Summary => {
            let summary = report::summarize(transactions, &options.summary);
            report::write_summary(&summary, writer)?;
        }
    }
    Ok(())
}

/// Read `path`, process it, and write the report. Returns the number of
/// transactions found.
pub fn run_file<W: Write>(
    path: &Path,
    options: &PipelineOptions,
    writer: W,
) -> Result<usize> {
    let log_text = platform::fs::read_file_lossy(path).map_err(|source| SoapDumpError::Io {
        path: path.to_path_buf(),
        operation: "read log file",
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = log_text.len(), "Log file loaded");

    let transactions = extract_transactions(&log_text);
    render(&transactions, options, writer)?;
    Ok(transactions.len())
}
