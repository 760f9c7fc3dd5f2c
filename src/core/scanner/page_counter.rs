// src/core/scanner/page_counter.rs

use once_cell::sync::Lazy;
use rust_i18n::t;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::core::models::CollectorResult;
use crate::core::scanner::ScanContext;
use crate::core::target::Target;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Estimates how many pages the target links to.
///
/// A failed fetch degrades to `0`. A page that loads but links nowhere counts
/// as `1`, since it at least contains itself.
pub async fn run_page_count(ctx: &ScanContext, target: &Target) -> CollectorResult<usize> {
    info!(url = %target.normalized_url, "Starting page count.");

    match ctx.fetcher.get(&target.normalized_url, Some(ctx.page_timeout)).await {
        Ok(page) => {
            debug!(status = page.status, "Fetched target page.");
            let count = count_pages(&page.body, &target.normalized_url);
            info!(count, "Page count finished.");
            CollectorResult::Ok(count)
        }
        Err(e) => {
            warn!(url = %target.normalized_url, error = %e, "Page count failed.");
            let message = t!("collector.page_count_error", locale = ctx.locale.code(), error = e.to_string());
            CollectorResult::degraded(0, message)
        }
    }
}

/// Counts distinct same-site hrefs in `body`.
///
/// An href qualifies when it is root-relative or starts with `base_url`.
/// Deduplication is by raw string, so `/a` and `/a/` count twice.
pub fn count_pages(body: &str, base_url: &str) -> usize {
    let document = Html::parse_document(body);
    let links: HashSet<&str> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.starts_with('/') || href.starts_with(base_url))
        .collect();

    debug!(links = links.len(), "Collected same-site links.");
    if links.is_empty() { 1 } else { links.len() }
}
