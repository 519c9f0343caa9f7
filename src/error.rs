//! Error Types
//!
//! Two failure domains exist in a run:
//! - **`RenderError`**: anything that goes wrong while talking to the rendering service
//!   for a single page. The extractor downgrades these to an absent result, so they only
//!   escape the library during discovery.
//! - **`PipelineError`**: failures that abort the whole batch.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure while navigating or querying a rendered page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rendering service unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("navigation to '{address}' failed: {reason}")]
    Navigation { address: String, reason: String },
    #[error("no page has been loaded in this context")]
    NotNavigated,
    #[error("no element matches selector '{selector}'")]
    ElementMissing { selector: String },
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("query '{selector}' returned {found}, expected {expected}")]
    UnexpectedValue {
        selector: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("document '{address}' did not finish within {timeout:?}")]
    Timeout { address: String, timeout: Duration },
}

/// Failure that aborts a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("could not discover conference talks at '{address}'")]
    Discovery {
        address: String,
        #[source]
        source: RenderError,
    },
    #[error("worker {worker_id} did not deliver its report: {reason}")]
    WorkerFailed { worker_id: usize, reason: String },
    #[error("could not load stop words from '{path}': {reason}")]
    StopWords { path: PathBuf, reason: String },
    #[error("could not write report '{path}'")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
