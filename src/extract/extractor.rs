//! Per-talk extraction.
//!
//! One talk = one rendering context: acquire, navigate, query author and body, close.
//! The context is closed whatever the outcome of the queries, and any failure is logged
//! and reported as `None`.

use super::types::{DocumentRef, TalkResult};
use crate::error::RenderError;
use crate::render::{DomQuery, RenderContext, Renderer};
use crate::text::stopwords::{filter_stop_words, StopWords};
use crate::text::tokenizer::{last_word, normalize};

use std::sync::Arc;
use std::time::Duration;

pub const AUTHOR_SELECTOR: &str = ".author-name";
pub const BODY_SELECTOR: &str = ".body-block p";

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub base_url: String,
    pub filter_stop_words: bool,
    pub timeout: Option<Duration>,
}

pub struct Extractor<R: Renderer> {
    renderer: Arc<R>,
    stop_words: Arc<StopWords>,
    options: ExtractOptions,
}

impl<R: Renderer> Extractor<R> {
    pub fn new(renderer: Arc<R>, stop_words: Arc<StopWords>, options: ExtractOptions) -> Self {
        Self {
            renderer,
            stop_words,
            options,
        }
    }

    /// Extracts one talk. Never fails: problems are logged and yield `None`.
    pub async fn extract(&self, document: &DocumentRef) -> Option<TalkResult> {
        let address = document.address(&self.options.base_url);

        match self.try_extract(&address).await {
            Ok(result) => {
                tracing::debug!(
                    "Extracted {} tokens from {} (author: {:?})",
                    result.tokens.len(),
                    document,
                    result.author
                );
                Some(result)
            }
            Err(e) => {
                tracing::warn!("Skipping talk {}: {}", document, e);
                None
            }
        }
    }

    async fn try_extract(&self, address: &str) -> Result<TalkResult, RenderError> {
        let mut page = self.renderer.acquire().await?;

        let outcome = match self.options.timeout {
            Some(limit) => tokio::time::timeout(limit, read_talk(&mut page, address))
                .await
                .unwrap_or_else(|_| {
                    Err(RenderError::Timeout {
                        address: address.to_string(),
                        timeout: limit,
                    })
                }),
            None => read_talk(&mut page, address).await,
        };

        page.close().await;

        let (author, text) = outcome?;
        let tokens = normalize(&text);
        let tokens = if self.options.filter_stop_words {
            filter_stop_words(tokens, &self.stop_words)
        } else {
            tokens
        };

        Ok(TalkResult { author, tokens })
    }
}

/// Navigates and reads the byline and the body paragraphs joined by single spaces.
async fn read_talk<C: RenderContext>(
    page: &mut C,
    address: &str,
) -> Result<(Option<String>, String), RenderError> {
    page.navigate(address).await?;

    let byline = page
        .evaluate(&DomQuery::text(AUTHOR_SELECTOR))
        .await?
        .into_text(AUTHOR_SELECTOR)?;
    let paragraphs = page
        .evaluate(&DomQuery::all_text(BODY_SELECTOR))
        .await?
        .into_list(BODY_SELECTOR)?;

    Ok((last_word(&byline), paragraphs.join(" ")))
}
