// soapdump - core/report.rs
//
// Raw (pipe-delimited) and summary rendering of transaction records.
// Core layer: writes to any Write trait object.
//
// The summary is computed as a pure fold over the records into a `Summary`
// value, then rendered through `Display`.

use crate::core::model::{TransactionRecord, SCHEMA};
use crate::util::constants;
use crate::util::error::ExportError;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Record format for non-summary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pipe-delimited, one line per transaction, no header.
    #[default]
    Raw,
    /// CSV with a header row.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

// =============================================================================
// Raw mode
// =============================================================================

/// One record as a single line of `|`-joined fields, without line terminator.
pub fn format_raw_line(record: &TransactionRecord) -> String {
    let mut line = String::new();
    for (i, spec) in SCHEMA.iter().enumerate() {
        if i > 0 {
            line.push(constants::RAW_DELIMITER);
        }
        line.push_str(&record.field(spec.field));
    }
    line
}

/// Write one raw line per record. Returns the number of lines written.
pub fn write_raw<W: Write>(
    records: &[TransactionRecord],
    mut writer: W,
) -> Result<usize, ExportError> {
    for record in records {
        writeln!(writer, "{}", format_raw_line(record))?;
    }
    writer.flush()?;
    Ok(records.len())
}

// =============================================================================
// Summary mode
// =============================================================================

/// Knobs for summary computation.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// How many states to list in the ranking.
    pub top_states: usize,
    /// Status value counted as successful (exact match).
    pub success_status: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_states: constants::DEFAULT_TOP_STATES,
            success_status: constants::DEFAULT_SUCCESS_STATUS.to_string(),
        }
    }
}

/// Numeric statistics over the amounts that parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountStats {
    pub count: usize,
    pub total: f64,
    pub largest: f64,
    pub smallest: f64,
}

/// Aggregate view of a transaction list.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Number of ranking slots requested (used for the heading).
    pub top_limit: usize,
    /// (state, count), count descending, ties in order of first appearance.
    pub top_states: Vec<(String, usize)>,
    /// `None` when no amount parsed as a number.
    pub amounts: Option<AmountStats>,
}

/// Compute summary statistics for `records`.
pub fn summarize(records: &[TransactionRecord], options: &SummaryOptions) -> Summary {
    let total = records.len();
    let successful = records
        .iter()
        .filter(|r| r.status == options.success_status)
        .count();

    Summary {
        total,
        successful,
        failed: total - successful,
        top_limit: options.top_states,
        top_states: rank_states(records, options.top_states),
        amounts: amount_stats(records),
    }
}

/// Tally states in order of first appearance, then stable-sort by count so
/// ties keep that order.
fn rank_states(records: &[TransactionRecord], limit: usize) -> Vec<(String, usize)> {
    let (mut tally, _) = records.iter().fold(
        (Vec::<(String, usize)>::new(), HashMap::<&str, usize>::new()),
        |(mut tally, mut index), record| {
            match index.get(record.state.as_str()) {
                Some(&i) => tally[i].1 += 1,
                None => {
                    index.insert(record.state.as_str(), tally.len());
                    tally.push((record.state.clone(), 1));
                }
            }
            (tally, index)
        },
    );
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(limit);
    tally
}

/// Parse an amount as a finite decimal number. Surrounding whitespace is
/// tolerated; anything else (empty, text, inf, NaN) is rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn amount_stats(records: &[TransactionRecord]) -> Option<AmountStats> {
    records
        .iter()
        .filter_map(|r| parse_amount(&r.amount))
        .fold(None, |acc: Option<AmountStats>, value| {
            Some(match acc {
                None => AmountStats {
                    count: 1,
                    total: value,
                    largest: value,
                    smallest: value,
                },
                Some(s) => AmountStats {
                    count: s.count + 1,
                    total: s.total + value,
                    largest: s.largest.max(value),
                    smallest: s.smallest.min(value),
                },
            })
        })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SUMMARY ===")?;
        writeln!(f, "Total Transactions: {}", self.total)?;
        writeln!(f, "Successful: {}", self.successful)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f)?;

        writeln!(f, "Top {} States by Transaction Count:", self.top_limit)?;
        for (state, count) in &self.top_states {
            writeln!(f, "  {state}: {count}")?;
        }
        writeln!(f)?;

        if let Some(stats) = &self.amounts {
            writeln!(f, "Transaction Amount Stats:")?;
            writeln!(f, "  Total: ${:.2}", stats.total)?;
            writeln!(f, "  Largest: ${:.2}", stats.largest)?;
            writeln!(f, "  Smallest: ${:.2}", stats.smallest)?;
        }
        Ok(())
    }
}

/// Render `summary` to `writer`.
pub fn write_summary<W: Write>(summary: &Summary, mut writer: W) -> Result<(), ExportError> {
    write!(writer, "{summary}")?;
    writer.flush()?;
    Ok(())
}
