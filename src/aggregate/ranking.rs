use std::cmp::Ordering;

/// Order between words with equal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreak {
    /// `a` before `b`.
    #[default]
    #[value(name = "asc")]
    Ascending,
    /// `b` before `a`.
    #[value(name = "desc")]
    Descending,
}

impl TieBreak {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Ascending => a.cmp(b),
            Self::Descending => b.cmp(a),
        }
    }
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based, contiguous.
    pub rank: usize,
    pub word: String,
    pub count: usize,
}

impl RankedEntry {
    /// The word with its first letter upper-cased.
    pub fn display_word(&self) -> String {
        capitalize(&self.word)
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
