//! Extraction Module
//!
//! Reads conference pages through the rendering service.
//!
//! ## Workflow
//! 1. **Discovery**: The conference index page is read once, producing the ordered list of talk references.
//! 2. **Extraction**: Each talk page is read in its own rendering context. Author and body text are
//!    pulled out, normalized and optionally stop-filtered. A failing talk yields an absent result
//!    instead of an error, so one bad page never aborts the batch.

pub mod discovery;
pub mod extractor;
pub mod types;
