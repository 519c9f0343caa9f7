//! Pipeline Coordinator
//!
//! Wires the subsystems into one run:
//! discovery -> partitioning -> worker pool -> aggregation.
//!
//! The coordinator only waits twice: on the single discovery fetch and on the pool barrier.
//! Persisting the ranking is left to the caller (see `report`).

pub mod types;

use crate::aggregate::frequency::FrequencyTable;
use crate::error::PipelineError;
use crate::executor::partitioner::partition;
use crate::executor::pool::WorkerPool;
use crate::executor::types::WorkerReport;
use crate::extract::discovery::discover_talks;
use crate::extract::extractor::{ExtractOptions, Extractor};
use crate::render::Renderer;
use crate::text::stopwords::StopWords;

use std::sync::Arc;
use types::{PipelineConfig, PipelineOutput, RunSummary};


/// Executes one full word count and returns the ranking with run counters.
pub async fn run_pipeline<R: Renderer>(
    renderer: Arc<R>,
    stop_words: Arc<StopWords>,
    config: &PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    config.validate()?;

    tracing::info!(
        "Getting conference talks from {} {}",
        config.month,
        config.year
    );
    let talks = discover_talks(renderer.as_ref(), &config.base_url, config.year, config.month).await?;
    tracing::info!("Found {} talks", talks.len());
    if talks.is_empty() {
        tracing::warn!("Conference index listed no talks, the report will be empty");
    }

    let chunks = partition(talks, config.workers)?;

    let extractor = Arc::new(Extractor::new(
        renderer,
        stop_words,
        ExtractOptions {
            base_url: config.base_url.clone(),
            filter_stop_words: config.filter_stop_words,
            timeout: config.document_timeout,
        },
    ));
    let reports = WorkerPool::with_extractor(extractor).run(chunks).await?;

    let table = FrequencyTable::from_reports(&reports);
    let entries = table.ranked(config.tie_break);
    let summary = summarize(&reports, &table);

    tracing::info!(
        "Run complete: {}/{} talks extracted, {} failed, {} tokens, {} unique words",
        summary.extracted,
        summary.documents,
        summary.failed,
        summary.tokens,
        summary.unique_words
    );

    Ok(PipelineOutput { entries, summary })
}

fn summarize(reports: &[WorkerReport], table: &FrequencyTable) -> RunSummary {
    RunSummary {
        documents: reports.iter().map(WorkerReport::len).sum(),
        extracted: reports.iter().map(WorkerReport::extracted).sum(),
        failed: reports.iter().map(WorkerReport::failed).sum(),
        tokens: table.total(),
        unique_words: table.unique_words(),
    }
}
