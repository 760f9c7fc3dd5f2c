// src/core/scanner/heuristic_scanner.rs

use rust_i18n::t;
use tracing::{debug, info, warn};

use crate::core::models::{CollectorResult, Finding};
use crate::core::scanner::ScanContext;
use crate::core::target::Target;

/// Fetches the target page and runs the rule table over its body.
///
/// The fetch is independent of the page counter's. The returned list is never
/// empty: a clean page yields the "no basic vulnerabilities" finding and a
/// failed fetch yields a single error finding.
pub async fn run_heuristic_scan(ctx: &ScanContext, target: &Target) -> CollectorResult<Vec<Finding>> {
    info!(url = %target.normalized_url, "Starting heuristic scan.");

    let page = match ctx.fetcher.get(&target.normalized_url, Some(ctx.page_timeout)).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %target.normalized_url, error = %e, "Heuristic scan fetch failed.");
            let message: String =
                t!("collector.heuristics_error", locale = ctx.locale.code(), error = e.to_string()).into();
            return CollectorResult::degraded(vec![message.clone()], message);
        }
    };

    let rules = ctx.rules();
    debug!(total_rules = rules.rules().len(), "Applying heuristic rules.");
    let mut findings = rules.evaluate(&page.body);

    if findings.is_empty() {
        findings.push(t!("heuristics.none_detected", locale = ctx.locale.code()).into());
    }

    info!(findings = findings.len(), "Heuristic scan finished.");
    CollectorResult::Ok(findings)
}
