//! Production renderer: plain HTTP GET plus static HTML querying.
//!
//! Conference pages render their talk list and talk bodies server-side, so no script
//! execution is needed to read `.doc-map` links, `.author-name` or `.body-block p`.

use super::html;
use super::service::{RenderContext, Renderer};
use super::types::{DomQuery, QueryValue};
use crate::error::RenderError;

const USER_AGENT: &str = concat!("conference-wordcount/", env!("CARGO_PKG_VERSION"));

/// Hands out one independent HTTP session per context.
#[derive(Debug, Clone, Default)]
pub struct HttpRenderer;

impl HttpRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HttpRenderer {
    type Context = HttpPage;

    async fn acquire(&self) -> Result<HttpPage, RenderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RenderError::Unavailable {
                reason: e.to_string(),
            })?;

        Ok(HttpPage {
            client,
            address: None,
            html: None,
        })
    }
}

/// A session holding at most one loaded document.
pub struct HttpPage {
    client: reqwest::Client,
    address: Option<String>,
    html: Option<String>,
}

impl RenderContext for HttpPage {
    async fn navigate(&mut self, address: &str) -> Result<(), RenderError> {
        let navigation_error = |reason: String| RenderError::Navigation {
            address: address.to_string(),
            reason,
        };

        tracing::trace!("GET {}", address);
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| navigation_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(navigation_error(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| navigation_error(e.to_string()))?;

        self.address = Some(address.to_string());
        self.html = Some(body);
        Ok(())
    }

    async fn evaluate(&mut self, query: &DomQuery) -> Result<QueryValue, RenderError> {
        let document = self.html.as_deref().ok_or(RenderError::NotNavigated)?;
        html::evaluate(document, query)
    }

    async fn close(self) {
        if let Some(address) = self.address {
            tracing::trace!("Closed session for {}", address);
        }
    }
}
