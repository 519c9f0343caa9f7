//! Fixture renderer serving HTML from memory.
//!
//! Pages are keyed by full address. Every acquired and closed context is counted so
//! callers can check that no context leaks, and per-address delays simulate slow pages.

use super::html;
use super::service::{RenderContext, Renderer};
use super::types::{DomQuery, QueryValue};
use crate::error::RenderError;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRenderer {
    pages: Arc<HashMap<String, String>>,
    delays: Arc<HashMap<String, Duration>>,
    acquired: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl InMemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `html` when `address` is navigated to.
    pub fn with_page(mut self, address: impl Into<String>, html: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.pages).insert(address.into(), html.into());
        self
    }

    /// Makes navigation to `address` take at least `delay`.
    pub fn with_delay(mut self, address: impl Into<String>, delay: Duration) -> Self {
        Arc::make_mut(&mut self.delays).insert(address.into(), delay);
        self
    }

    /// Number of contexts handed out so far.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of contexts released so far.
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Renderer for InMemoryRenderer {
    type Context = InMemoryPage;

    async fn acquire(&self) -> Result<InMemoryPage, RenderError> {
        self.acquired.fetch_add(1, Ordering::SeqCst);

        Ok(InMemoryPage {
            pages: self.pages.clone(),
            delays: self.delays.clone(),
            closed: self.closed.clone(),
            html: None,
        })
    }
}

pub struct InMemoryPage {
    pages: Arc<HashMap<String, String>>,
    delays: Arc<HashMap<String, Duration>>,
    closed: Arc<AtomicUsize>,
    html: Option<String>,
}

impl RenderContext for InMemoryPage {
    async fn navigate(&mut self, address: &str) -> Result<(), RenderError> {
        if let Some(delay) = self.delays.get(address) {
            tokio::time::sleep(*delay).await;
        }

        match self.pages.get(address) {
            Some(page) => {
                self.html = Some(page.clone());
                Ok(())
            }
            None => Err(RenderError::Navigation {
                address: address.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            }),
        }
    }

    async fn evaluate(&mut self, query: &DomQuery) -> Result<QueryValue, RenderError> {
        let document = self.html.as_deref().ok_or(RenderError::NotNavigated)?;
        html::evaluate(document, query)
    }

    async fn close(self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
