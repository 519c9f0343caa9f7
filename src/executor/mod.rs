//! Parallel Executor Module
//!
//! Fans a list of talk references out over a fixed set of workers and waits for all of them.
//!
//! ## Architecture Overview
//! 1. **Partitioning**: The ordered reference list is split into `w` contiguous chunks whose
//!    sizes differ by at most one.
//! 2. **Dispatch**: One worker task is spawned per chunk, empty chunks included. Assignment is
//!    fixed at dispatch; there is no work stealing.
//! 3. **Execution**: A worker walks its chunk sequentially, one rendering context per talk,
//!    and records a result or an absence for every talk (settle-all).
//! 4. **Barrier**: The pool returns only once every worker has delivered its report exactly once.
//!
//! Workers share nothing mutable. Counting happens afterwards, on the coordinator.
//!
//! ## Submodules
//! - **`partitioner`**: Balanced contiguous chunking.
//! - **`pool`**: Worker spawning, the extraction job type and the completion barrier.
//! - **`types`**: `Chunk` and `WorkerReport`.

pub mod partitioner;
pub mod pool;
pub mod types;

#[cfg(test)]
mod tests;
