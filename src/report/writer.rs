use crate::aggregate::ranking::RankedEntry;
use crate::error::PipelineError;
use crate::pipeline::types::ConferenceMonth;

use std::fmt;
use std::path::{Path, PathBuf};

const RANK_WIDTH: usize = 3;
const WORD_WIDTH: usize = 24;

/// Whether the counted words went through stop-word filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Core,
    All,
}

impl ReportMode {
    pub fn from_filtering(filter_stop_words: bool) -> Self {
        if filter_stop_words {
            Self::Core
        } else {
            Self::All
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportName {
    pub mode: ReportMode,
    pub year: u16,
    pub month: ConferenceMonth,
}

impl ReportName {
    pub fn file_name(&self) -> String {
        format!(
            "{}-{:04}-{}-conference.json",
            self.mode.as_str(),
            self.year,
            self.month
        )
    }
}

impl fmt::Display for ReportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// `"<rank>: <Word>: <count>"` with rank and word padded to fixed widths.
pub fn render_line(entry: &RankedEntry) -> String {
    format!(
        "{:<rank_width$}: {:<word_width$}: {}",
        entry.rank,
        entry.display_word(),
        entry.count,
        rank_width = RANK_WIDTH,
        word_width = WORD_WIDTH,
    )
}

pub fn render_lines(entries: &[RankedEntry]) -> Vec<String> {
    entries.iter().map(render_line).collect()
}

/// Writes the ranking under `dir`, creating the directory if needed. Returns the file path.
pub async fn write_report(
    dir: &Path,
    name: &ReportName,
    entries: &[RankedEntry],
) -> Result<PathBuf, PipelineError> {
    let path = dir.join(name.file_name());
    let report_error = |source: std::io::Error| PipelineError::Report {
        path: path.clone(),
        source,
    };

    let body = serde_json::to_vec(&render_lines(entries))
        .map_err(|e| report_error(std::io::Error::from(e)))?;

    tokio::fs::create_dir_all(dir).await.map_err(report_error)?;
    tokio::fs::write(&path, body).await.map_err(report_error)?;

    tracing::info!("Wrote {} ranked words to {}", entries.len(), path.display());
    Ok(path)
}
