// src/core/scanner/address_resolver.rs

use rust_i18n::t;
use tracing::{info, warn};

use crate::core::models::CollectorResult;
use crate::core::scanner::ScanContext;
use crate::core::target::Target;

/// Resolves the target hostname to a single address.
///
/// There is no timeout beyond the resolver's own and no retry; a failed lookup
/// degrades to the localized "Unknown" sentinel.
pub async fn run_address_lookup(ctx: &ScanContext, target: &Target) -> CollectorResult<String> {
    info!(hostname = %target.hostname, "Starting address lookup.");

    match ctx.resolver.resolve(&target.hostname).await {
        Ok(address) => {
            info!(hostname = %target.hostname, %address, "Address lookup finished.");
            CollectorResult::Ok(address)
        }
        Err(e) => {
            warn!(hostname = %target.hostname, error = %e, "Address lookup failed.");
            let message = t!("collector.address_error", locale = ctx.locale.code(), error = e.to_string());
            CollectorResult::degraded(ctx.locale.unknown(), message)
        }
    }
}
