use super::types::{DomQuery, QueryValue};
use crate::error::RenderError;

use scraper::{ElementRef, Html, Node, Selector};

/// Evaluates `query` against an HTML document.
///
/// Parsing happens per call; `scraper::Html` is not `Send`, so it never lives across an
/// await point in the callers.
pub fn evaluate(html: &str, query: &DomQuery) -> Result<QueryValue, RenderError> {
    let selector = parse_selector(query.selector())?;
    let document = Html::parse_document(html);

    match query {
        DomQuery::Text { selector: raw } => document
            .select(&selector)
            .next()
            .map(|element| QueryValue::Text(inner_text(element)))
            .ok_or_else(|| RenderError::ElementMissing {
                selector: raw.clone(),
            }),
        DomQuery::AllText { .. } => Ok(QueryValue::List(
            document.select(&selector).map(inner_text).collect(),
        )),
        DomQuery::AllAttr { attr, .. } => Ok(QueryValue::List(
            document
                .select(&selector)
                .filter_map(|element| element.value().attr(attr))
                .map(str::to_string)
                .collect(),
        )),
    }
}

fn parse_selector(raw: &str) -> Result<Selector, RenderError> {
    Selector::parse(raw).map_err(|e| RenderError::InvalidSelector {
        selector: raw.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Elements that break a line in rendered text; words on either side stay separate.
const BREAKING_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p",
    "pre", "section", "table", "td", "th", "tr", "ul",
];

fn is_breaking(node: &Node) -> bool {
    matches!(node, Node::Element(element) if BREAKING_ELEMENTS.contains(&element.name()))
}

/// Descendant text with whitespace runs collapsed, close to what a browser's `innerText` gives.
///
/// Inline markup (`<em>`, `<a>`) joins without a gap. A `<br>` or block element separates the
/// text before it from the text after it.
fn inner_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();

    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => {
                if node.prev_sibling().is_some_and(|prev| is_breaking(prev.value())) {
                    raw.push(' ');
                }
                raw.push_str(text);
            }
            other if is_breaking(other) => raw.push(' '),
            _ => {}
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
