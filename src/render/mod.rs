//! Rendering Service Module
//!
//! The capability boundary between the pipeline and whatever fetches and queries pages.
//! The extractor and the discovery step only ever see the two traits in `service`.
//!
//! ## Submodules
//! - **`service`**: `Renderer` (acquires contexts) and `RenderContext` (navigate / evaluate / close).
//! - **`types`**: DOM queries and the values they return.
//! - **`html`**: CSS-selector evaluation against a parsed HTML document.
//! - **`http`**: Production renderer backed by `reqwest`.
//! - **`memory`**: Fixture renderer serving HTML from memory, used by tests and offline runs.

pub mod html;
pub mod http;
pub mod memory;
pub mod service;
pub mod types;

pub use service::{RenderContext, Renderer};
pub use types::{DomQuery, QueryValue};
