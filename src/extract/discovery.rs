use super::types::DocumentRef;
use crate::error::{PipelineError, RenderError};
use crate::pipeline::types::ConferenceMonth;
use crate::render::{DomQuery, RenderContext, Renderer};

pub const TALK_LINK_SELECTOR: &str = ".doc-map .doc-map a";

/// Address of a conference's table of contents.
pub fn conference_address(base_url: &str, year: u16, month: ConferenceMonth) -> String {
    format!(
        "{}/study/general-conference/{}/{}?lang=eng",
        base_url.trim_end_matches('/'),
        year,
        month
    )
}

/// Reads the ordered list of talk references for one conference.
///
/// Runs once, before any worker exists. Any failure here is fatal for the run.
pub async fn discover_talks<R: Renderer>(
    renderer: &R,
    base_url: &str,
    year: u16,
    month: ConferenceMonth,
) -> Result<Vec<DocumentRef>, PipelineError> {
    let address = conference_address(base_url, year, month);

    let links = read_links(renderer, &address)
        .await
        .map_err(|source| PipelineError::Discovery {
            address: address.clone(),
            source,
        })?;

    Ok(links.into_iter().map(DocumentRef).collect())
}

async fn read_links<R: Renderer>(renderer: &R, address: &str) -> Result<Vec<String>, RenderError> {
    let mut page = renderer.acquire().await?;

    let links = match page.navigate(address).await {
        Ok(()) => page
            .evaluate(&DomQuery::all_attr(TALK_LINK_SELECTOR, "href"))
            .await
            .and_then(|value| value.into_list(TALK_LINK_SELECTOR)),
        Err(e) => Err(e),
    };

    page.close().await;
    links
}
