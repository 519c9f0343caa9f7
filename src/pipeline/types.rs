use crate::aggregate::ranking::{RankedEntry, TieBreak};
use crate::error::PipelineError;
use crate::report::writer::{ReportMode, ReportName};

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.churchofjesuschrist.org";

/// Years appear verbatim in addresses and as four digits in report names.
pub const VALID_YEARS: std::ops::RangeInclusive<u16> = 1000..=9999;

/// General conference is held twice a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ConferenceMonth {
    #[value(name = "04", alias = "april")]
    April,
    #[value(name = "10", alias = "october")]
    October,
}

impl ConferenceMonth {
    /// Two-digit form used in addresses and report names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::April => "04",
            Self::October => "10",
        }
    }

    /// Most recent conference held on or before `today`.
    pub fn current_cycle(today: NaiveDate) -> (u16, ConferenceMonth) {
        let year = today.year() as u16;
        match today.month() {
            10..=12 => (year, Self::October),
            4..=9 => (year, Self::April),
            _ => (year - 1, Self::October),
        }
    }
}

impl fmt::Display for ConferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every tunable of a run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub year: u16,
    pub month: ConferenceMonth,
    /// Drop short tokens and stop words before counting.
    pub filter_stop_words: bool,
    /// Number of parallel workers (one chunk each).
    pub workers: usize,
    pub base_url: String,
    /// Upper bound per document; `None` waits indefinitely.
    pub document_timeout: Option<Duration>,
    pub tie_break: TieBreak,
    /// JSON stop-word list replacing the built-in one.
    pub stop_words: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let (year, month) = ConferenceMonth::current_cycle(chrono::Local::now().date_naive());

        Self {
            year,
            month,
            filter_stop_words: true,
            workers: default_workers(),
            base_url: DEFAULT_BASE_URL.to_string(),
            document_timeout: None,
            tie_break: TieBreak::Ascending,
            stop_words: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.workers == 0 {
            return Err(PipelineError::Configuration(
                "worker count must be at least 1".to_string(),
            ));
        }
        if !VALID_YEARS.contains(&self.year) {
            return Err(PipelineError::Configuration(format!(
                "year {} is not a four-digit year",
                self.year
            )));
        }
        Ok(())
    }

    pub fn report_name(&self) -> ReportName {
        ReportName {
            mode: ReportMode::from_filtering(self.filter_stop_words),
            year: self.year,
            month: self.month,
        }
    }
}

/// Host parallelism, falling back to a single worker.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Counters describing one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub extracted: usize,
    pub failed: usize,
    pub tokens: usize,
    pub unique_words: usize,
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub entries: Vec<RankedEntry>,
    pub summary: RunSummary,
}
