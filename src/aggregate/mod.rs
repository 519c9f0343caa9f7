//! Aggregation Module
//!
//! Runs on the coordinator after the pool barrier, so nothing here is shared with workers
//! and no locking is needed.
//!
//! ## Responsibilities
//! - **Folding**: Every token of every successful talk increments its word counter exactly once.
//! - **Ranking**: Words ordered by descending count with a total, configurable tie-break,
//!   then numbered from 1.
//!
//! ## Submodules
//! - **`frequency`**: `FrequencyTable`.
//! - **`ranking`**: `TieBreak`, `RankedEntry` and display capitalization.

pub mod frequency;
pub mod ranking;
