use crate::extract::types::{DocumentRef, TalkResult};

/// Contiguous slice of the talk list owned by a single worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of the chunk in the partition, also the worker's id.
    pub worker_id: usize,
    pub documents: Vec<DocumentRef>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Everything a worker hands back: one entry per document of its chunk, in chunk order.
/// `None` marks a talk whose extraction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub results: Vec<Option<TalkResult>>,
}

impl WorkerReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn extracted(&self) -> usize {
        self.results.iter().filter(|result| result.is_some()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.extracted()
    }

    /// Successful results only.
    pub fn talks(&self) -> impl Iterator<Item = &TalkResult> {
        self.results.iter().flatten()
    }
}
