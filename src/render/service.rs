//! Rendering capability traits.
//!
//! A `Renderer` hands out independent contexts. Each context is owned by exactly one
//! caller for the duration of one document and must be closed by that caller on every
//! path, success or failure.

use super::types::{DomQuery, QueryValue};
use crate::error::RenderError;

use std::future::Future;

/// Source of isolated rendering contexts. Shared read-only between workers.
pub trait Renderer: Send + Sync + 'static {
    type Context: RenderContext;

    /// Opens a fresh context (a browser tab, an HTTP session, ...).
    fn acquire(&self) -> impl Future<Output = Result<Self::Context, RenderError>> + Send;
}

/// One navigable page.
pub trait RenderContext: Send + 'static {
    /// Loads `address`, replacing any previously loaded document.
    fn navigate(&mut self, address: &str) -> impl Future<Output = Result<(), RenderError>> + Send;

    /// Runs `query` against the loaded document.
    fn evaluate(
        &mut self,
        query: &DomQuery,
    ) -> impl Future<Output = Result<QueryValue, RenderError>> + Send;

    /// Releases the context. Never fails from the caller's point of view.
    fn close(self) -> impl Future<Output = ()> + Send;
}
