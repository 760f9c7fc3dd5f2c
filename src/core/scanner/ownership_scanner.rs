// src/core/scanner/ownership_scanner.rs

use rust_i18n::t;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use url::Url;

use crate::core::error::{LookupError, ParseError, TransportError};
use crate::core::locale::Locale;
use crate::core::models::{CollectorResult, OWNERSHIP_FIELDS, OwnershipRecord};
use crate::core::scanner::ScanContext;
use crate::core::target::Target;

/// Registry field feeding each `OWNERSHIP_FIELDS` entry, and whether it is a list.
const REGISTRY_FIELDS: [(&str, bool); 6] = [
    ("domainName", false),
    ("registrarName", false),
    ("creationDate", false),
    ("expirationDate", false),
    ("nameServers", true),
    ("status", true),
];

/// Queries the registry API for the target's registration data.
///
/// Any failure collapses the record into a single localized error entry
/// instead of a partially filled one.
pub async fn run_ownership_lookup(ctx: &ScanContext, target: &Target) -> CollectorResult<OwnershipRecord> {
    info!(hostname = %target.hostname, "Starting ownership lookup.");

    match fetch_record(ctx, target).await {
        Ok(record) => {
            info!(hostname = %target.hostname, "Ownership lookup finished.");
            CollectorResult::Ok(record)
        }
        Err(e) => {
            warn!(hostname = %target.hostname, error = %e, "Ownership lookup failed.");
            let message: String =
                t!("collector.owner_error", locale = ctx.locale.code(), error = e.to_string()).into();
            CollectorResult::degraded(OwnershipRecord::error(ctx.locale.error_key(), message.clone()), message)
        }
    }
}

async fn fetch_record(ctx: &ScanContext, target: &Target) -> Result<OwnershipRecord, LookupError> {
    let url = Url::parse_with_params(&ctx.registry_endpoint, &[("domain", target.hostname.as_str())])
        .map_err(TransportError::from)?;
    debug!(url = %url, "Querying registry.");

    let page = ctx.fetcher.get(url.as_str(), ctx.registry_timeout).await?;
    Ok(parse_registry_response(&page.body, ctx.locale)?)
}

/// Maps a registry JSON document onto the six ownership fields.
///
/// Absent or null fields become "Unknown". List fields are joined with `", "`
/// and an empty list is also "Unknown".
pub fn parse_registry_response(body: &str, locale: Locale) -> Result<OwnershipRecord, ParseError> {
    let data: Value = serde_json::from_str(body)?;
    let object = data.as_object().ok_or(ParseError::NotAnObject)?;
    let unknown = locale.unknown();

    let mut record = OwnershipRecord::new();
    for (label, (key, is_list)) in OWNERSHIP_FIELDS.iter().zip(REGISTRY_FIELDS) {
        let value = if is_list {
            list_field(object, key)
        } else {
            text_field(object, key)
        };
        record.push(*label, value.unwrap_or_else(|| unknown.clone()));
    }
    Ok(record)
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn list_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
