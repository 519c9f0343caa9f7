use std::fmt;

/// Site-relative path of one talk, as found in the conference index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef(pub String);

impl DocumentRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Absolute address of the talk. References that already are absolute URLs pass through.
    pub fn address(&self, base_url: &str) -> String {
        if self.0.starts_with("http://") || self.0.starts_with("https://") {
            self.0.clone()
        } else {
            format!("{}{}", base_url.trim_end_matches('/'), self.0)
        }
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What one talk contributes to the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkResult {
    /// Speaker surname, when the byline holds at least one word.
    pub author: Option<String>,
    pub tokens: Vec<String>,
}
