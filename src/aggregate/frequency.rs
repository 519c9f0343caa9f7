use super::ranking::{RankedEntry, TieBreak};
use crate::executor::types::WorkerReport;

use std::collections::HashMap;

/// Word -> occurrence count. Counts are always >= 1 and the table never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds every worker's successful talks; absent results are skipped.
    pub fn from_reports(reports: &[WorkerReport]) -> Self {
        let mut table = Self::new();
        for talk in reports.iter().flat_map(WorkerReport::talks) {
            table.fold(&talk.tokens);
        }

        tracing::info!(
            "Counted {} words, {} unique",
            table.total(),
            table.unique_words()
        );
        table
    }

    /// Increments the counter of each token.
    pub fn fold<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            match self.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(token.to_string(), 1);
                }
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    /// Total number of folded tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries ordered by descending count, ties broken by `tie_break`, ranked from 1.
    pub fn ranked(&self, tie_break: TieBreak) -> Vec<RankedEntry> {
        let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
        entries.sort_by(|(word_a, count_a), (word_b, count_b)| {
            count_b
                .cmp(count_a)
                .then_with(|| tie_break.compare(word_a, word_b))
        });

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (word, count))| RankedEntry {
                rank: i + 1,
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}
