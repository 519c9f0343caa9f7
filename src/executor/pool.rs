//! Worker Pool Implementation
//!
//! One tokio task per chunk on the multi-threaded runtime, so workers run in parallel.
//! Each worker processes its talks one at a time and returns its report through its
//! join handle, which is the single delivery point. The coordinator awaits every handle
//! before returning.

use super::types::{Chunk, WorkerReport};
use crate::error::PipelineError;
use crate::extract::extractor::Extractor;
use crate::extract::types::{DocumentRef, TalkResult};
use crate::render::Renderer;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by an extraction job.
pub type ExtractFuture = Pin<Box<dyn Future<Output = Option<TalkResult>> + Send>>;

/// Type-erased, thread-safe extraction job applied to every talk.
/// Returning `None` marks the talk as failed; the job itself never errors.
pub type ExtractFn = Arc<dyn Fn(DocumentRef) -> ExtractFuture + Send + Sync>;

pub struct WorkerPool {
    job: ExtractFn,
}

impl WorkerPool {
    /// Builds a pool around any async extraction function.
    pub fn new<F, Fut>(job: F) -> Self
    where
        F: Fn(DocumentRef) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<TalkResult>> + Send + 'static,
    {
        // Box::pin erases the concrete future type so the job can be cloned into every worker.
        let job: ExtractFn = Arc::new(move |document: DocumentRef| {
            Box::pin(job(document)) as ExtractFuture
        });

        Self { job }
    }

    /// Pool whose job is `extractor.extract`.
    pub fn with_extractor<R: Renderer>(extractor: Arc<Extractor<R>>) -> Self {
        Self::new(move |document: DocumentRef| {
            let extractor = extractor.clone();
            async move { extractor.extract(&document).await }
        })
    }

    /// Runs one worker per chunk and blocks until all of them delivered.
    ///
    /// Reports come back ordered by worker id. A worker that panics or gets cancelled breaks
    /// the settle-all contract, so the remaining workers are aborted and the run fails.
    pub async fn run(&self, chunks: Vec<Chunk>) -> Result<Vec<WorkerReport>, PipelineError> {
        tracing::info!("Starting {} workers", chunks.len());

        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                let worker_id = chunk.worker_id;
                let job = self.job.clone();
                (worker_id, tokio::spawn(run_worker(chunk, job)))
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        let mut handles = handles.into_iter();

        while let Some((worker_id, handle)) = handles.next() {
            match handle.await {
                Ok(report) => {
                    tracing::debug!(
                        "Worker {} delivered {} results",
                        worker_id,
                        report.len()
                    );
                    reports.push(report);
                }
                Err(e) => {
                    tracing::error!("Worker {} failed: {}", worker_id, e);
                    for (_, pending) in handles {
                        pending.abort();
                    }
                    return Err(PipelineError::WorkerFailed {
                        worker_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!("All {} workers finished", reports.len());
        Ok(reports)
    }
}

/// Body of one worker: sequential over its chunk, one result slot per talk.
async fn run_worker(chunk: Chunk, job: ExtractFn) -> WorkerReport {
    let worker_id = chunk.worker_id;
    tracing::info!("Worker {}: counting {} talks", worker_id, chunk.len());

    let mut results = Vec::with_capacity(chunk.len());
    for document in chunk.documents {
        results.push(job(document).await);
    }

    let report = WorkerReport { worker_id, results };
    tracing::info!(
        "Worker {} finished: {} extracted, {} failed",
        worker_id,
        report.extracted(),
        report.failed()
    );
    report
}
