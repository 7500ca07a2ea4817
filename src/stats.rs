use crate::api::{ApiError, Fetch, fetch_as};
use crate::models::{LifespanDataset, Page, Species};
use serde::{Deserialize, Serialize};

/// Aggregate over the validated lifespans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifespanSummary {
    pub count: usize,
    pub mean: f64,
}

/// Walk the species collection from `start_url`, following `next` links until
/// one is null or missing, and keep every entry whose lifespan is purely digits.
///
/// A failed page aborts the whole walk. Visiting more than `max_pages` pages is
/// treated as a malformed pagination chain and returns [`ApiError::PageLimit`].
pub fn collect_lifespans<F: Fetch + ?Sized>(
    fetch: &F,
    start_url: &str,
    max_pages: u32,
) -> Result<LifespanDataset, ApiError> {
    let mut out = LifespanDataset::default();
    let mut next = Some(start_url.to_string());
    let mut pages = 0u32;

    while let Some(url) = next {
        if pages >= max_pages {
            return Err(ApiError::PageLimit(max_pages));
        }
        pages += 1;

        let page: Page<Species> = fetch_as(fetch, &url)?;
        for sp in &page.results {
            if let Some(years) = sp.lifespan() {
                out.push(sp.display_name(), years);
            }
        }
        next = page.next;
    }

    log::debug!("species walk: {} page(s), {} valid lifespan(s)", pages, out.len());
    Ok(out)
}

/// `None` when there is nothing to average.
pub fn summarize(data: &LifespanDataset) -> Option<LifespanSummary> {
    data.mean().map(|mean| LifespanSummary {
        count: data.len(),
        mean,
    })
}
