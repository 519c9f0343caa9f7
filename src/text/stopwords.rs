//! Static stop-word set and the filtering stage applied after tokenization.

use crate::error::PipelineError;

use std::collections::HashSet;
use std::path::Path;

const BUILT_IN: &str = include_str!("../../data/stop_words.txt");

/// Tokens at or below this length are always rejected when filtering.
pub const MIN_TOKEN_LEN: usize = 2;

/// Read-only rejection set, loaded once and shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The English list bundled with the crate.
    pub fn english() -> Self {
        Self::from_words(BUILT_IN.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Loads a JSON array of strings, e.g. `["the", "and", "unto"]`.
    pub fn from_json_file(path: &Path) -> Result<Self, PipelineError> {
        let raw = std::fs::read_to_string(path).map_err(|e| PipelineError::StopWords {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let words: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| PipelineError::StopWords {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::info!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(Self::from_words(words))
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Keeps a token iff it is longer than [`MIN_TOKEN_LEN`] and not in the stop set.
pub fn filter_stop_words(tokens: Vec<String>, stop_words: &StopWords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| token.chars().count() > MIN_TOKEN_LEN && !stop_words.contains(token))
        .collect()
}
