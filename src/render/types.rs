use crate::error::RenderError;

/// A query evaluated against the currently loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomQuery {
    /// Text of the first element matching the selector. Missing element is an error.
    Text { selector: String },
    /// Text of every matching element, in document order.
    AllText { selector: String },
    /// Value of `attr` on every matching element that carries it.
    AllAttr { selector: String, attr: String },
}

impl DomQuery {
    pub fn text(selector: impl Into<String>) -> Self {
        Self::Text {
            selector: selector.into(),
        }
    }

    pub fn all_text(selector: impl Into<String>) -> Self {
        Self::AllText {
            selector: selector.into(),
        }
    }

    pub fn all_attr(selector: impl Into<String>, attr: impl Into<String>) -> Self {
        Self::AllAttr {
            selector: selector.into(),
            attr: attr.into(),
        }
    }

    pub fn selector(&self) -> &str {
        match self {
            Self::Text { selector }
            | Self::AllText { selector }
            | Self::AllAttr { selector, .. } => selector,
        }
    }
}

/// Result of evaluating a [`DomQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    List(Vec<String>),
}

impl QueryValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }

    pub fn into_text(self, selector: &str) -> Result<String, RenderError> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(RenderError::UnexpectedValue {
                selector: selector.to_string(),
                expected: "text",
                found: other.kind(),
            }),
        }
    }

    pub fn into_list(self, selector: &str) -> Result<Vec<String>, RenderError> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(RenderError::UnexpectedValue {
                selector: selector.to_string(),
                expected: "list",
                found: other.kind(),
            }),
        }
    }
}
