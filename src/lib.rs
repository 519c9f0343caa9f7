//! Conference Word Count Library
//!
//! Fetches every talk of a general conference, normalizes the text and produces a ranked
//! word-frequency report. The binary (`main.rs`) is a thin CLI over `pipeline::run_pipeline`.
//!
//! ## Architecture Modules
//! - **`render`**: The rendering-service capability (navigate / evaluate / close) with an HTTP
//!   implementation and an in-memory fixture implementation.
//! - **`text`**: Normalization, tokenization and stop-word filtering.
//! - **`extract`**: Conference discovery and failure-isolated per-talk extraction.
//! - **`executor`**: Balanced partitioning and the parallel worker pool with its completion barrier.
//! - **`aggregate`**: Frequency folding and deterministic ranking.
//! - **`report`**: JSON report naming, line rendering and persistence.
//! - **`pipeline`**: Configuration and the coordinator tying the stages together.

pub mod aggregate;
pub mod error;
pub mod executor;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod text;
