// src/core/scanner/mod.rs

// One module per collector. Each takes the session context and the target and
// always returns a `CollectorResult`.
pub mod address_resolver;
pub mod heuristic_scanner;
pub mod ownership_scanner;
pub mod page_counter;

#[cfg(test)]
pub mod stubs;

use rust_i18n::t;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use strum::{EnumIter, IntoEnumIterator};
use tracing::info;

use crate::config::Settings;
use crate::core::error::{PersistenceError, TransportError};
use crate::core::knowledge_base::{HeuristicRule, RuleSet};
use crate::core::locale::Locale;
use crate::core::models::{CollectorResult, Finding, OwnershipRecord};
use crate::core::report::Report;
use crate::core::target::Target;
use crate::core::transport::{HostResolver, HttpFetcher, PageFetcher, SystemResolver};
use self::address_resolver::run_address_lookup;
use self::heuristic_scanner::run_heuristic_scan;
use self::ownership_scanner::run_ownership_lookup;
use self::page_counter::run_page_count;

/// Everything a session needs, passed explicitly into every collector.
#[derive(Clone)]
pub struct ScanContext {
    pub fetcher: Arc<dyn PageFetcher>,
    pub resolver: Arc<dyn HostResolver>,
    pub locale: Locale,
    /// Operator-supplied heuristics, evaluated after the built-in ones.
    pub extra_rules: Vec<HeuristicRule>,
    pub page_timeout: Duration,
    pub registry_endpoint: String,
    pub registry_timeout: Option<Duration>,
    pub report_dir: PathBuf,
}

impl ScanContext {
    pub fn new(settings: &Settings, fetcher: Arc<dyn PageFetcher>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            fetcher,
            resolver,
            locale: settings.locale,
            extra_rules: settings.rules.clone(),
            page_timeout: settings.page_timeout(),
            registry_endpoint: settings.registry_endpoint.clone(),
            registry_timeout: settings.registry_timeout(),
            report_dir: settings.report_dir.clone(),
        }
    }

    /// Wires the real HTTP client and the system resolver.
    pub fn from_settings(settings: &Settings) -> Result<Self, TransportError> {
        let fetcher = HttpFetcher::new(&settings.user_agent)?;
        Ok(Self::new(settings, Arc::new(fetcher), Arc::new(SystemResolver::new())))
    }

    pub fn with_locale(&self, locale: Locale) -> Self {
        Self { locale, ..self.clone() }
    }

    pub fn rules(&self) -> RuleSet {
        RuleSet::builtin(self.locale).with_rules(self.extra_rules.iter().cloned())
    }
}

/// What the operator can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Operation {
    CountPages,
    ResolveAddress,
    CheckVulnerabilities,
    OwnerInfo,
    FullReport,
}

impl Operation {
    pub fn shortcut(self) -> char {
        match self {
            Operation::CountPages => '1',
            Operation::ResolveAddress => '2',
            Operation::CheckVulnerabilities => '3',
            Operation::OwnerInfo => '4',
            Operation::FullReport => '5',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Operation::iter().find(|op| op.shortcut() == key)
    }

    pub fn label(self, locale: Locale) -> String {
        let id = match self {
            Operation::CountPages => "menu.count_pages",
            Operation::ResolveAddress => "menu.resolve_address",
            Operation::CheckVulnerabilities => "menu.check_vulnerabilities",
            Operation::OwnerInfo => "menu.owner_info",
            Operation::FullReport => "menu.full_report",
        };
        t!(id, locale = locale.code()).into_owned()
    }
}

/// The result handed back to the presentation layer.
#[derive(Debug, Clone)]
pub enum Outcome {
    PageCount(CollectorResult<usize>),
    Address(CollectorResult<String>),
    Findings(CollectorResult<Vec<Finding>>),
    Ownership(CollectorResult<OwnershipRecord>),
    Report { path: PathBuf, report: Box<Report> },
}

/// Runs one operation for one raw URL.
///
/// Collector failures come back inside the `Outcome`; only a failure to write
/// the report is returned as an error.
pub async fn run_operation(ctx: &ScanContext, operation: Operation, raw_input: &str) -> Result<Outcome, PersistenceError> {
    let target = Target::parse(raw_input);
    info!(?operation, url = %target.normalized_url, "Starting session.");

    let outcome = match operation {
        Operation::CountPages => Outcome::PageCount(run_page_count(ctx, &target).await),
        Operation::ResolveAddress => Outcome::Address(run_address_lookup(ctx, &target).await),
        Operation::CheckVulnerabilities => Outcome::Findings(run_heuristic_scan(ctx, &target).await),
        Operation::OwnerInfo => Outcome::Ownership(run_ownership_lookup(ctx, &target).await),
        Operation::FullReport => {
            let report = run_full_scan(ctx, target).await;
            let path = report.persist(&ctx.report_dir, ctx.locale)?;
            Outcome::Report { path, report: Box::new(report) }
        }
    };

    info!(?operation, "Session finished.");
    Ok(outcome)
}

/// Runs every collector against `target`, one after the other, and merges the
/// results. No collector sees another's output.
pub async fn run_full_scan(ctx: &ScanContext, target: Target) -> Report {
    let page_count = run_page_count(ctx, &target).await;
    let address = run_address_lookup(ctx, &target).await;
    let findings = run_heuristic_scan(ctx, &target).await;
    let ownership = run_ownership_lookup(ctx, &target).await;

    let degraded = [
        page_count.is_degraded(),
        address.is_degraded(),
        findings.is_degraded(),
        ownership.is_degraded(),
    ]
    .iter()
    .filter(|d| **d)
    .count();
    info!(degraded, "All collectors finished.");

    Report::assemble(target, page_count, address, findings, ownership)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::stubs::{StubFetcher, StubResolver, context};
    use tempfile::tempdir;

    const STUB_MESSAGE: &str = "stub network down";

    #[test]
    fn shortcuts_map_to_operations() {
        assert_eq!(Operation::from_shortcut('1'), Some(Operation::CountPages));
        assert_eq!(Operation::from_shortcut('5'), Some(Operation::FullReport));
        assert_eq!(Operation::from_shortcut('0'), None);
        assert_eq!(Operation::OwnerInfo.label(Locale::En), "Owner Information");
        assert_eq!(Operation::OwnerInfo.label(Locale::Pt), "Informações do responsável");
    }

    #[tokio::test]
    async fn collectors_degrade_independently() {
        let fetcher = Arc::new(StubFetcher::new().fail("https://", STUB_MESSAGE));
        let ctx = context(fetcher.clone(), StubResolver::Address("93.184.216.34".into()));

        let report = run_full_scan(&ctx, Target::parse("example.com")).await;

        assert_eq!(report.target.normalized_url, "https://example.com");
        assert_eq!(report.target.hostname, "example.com");
        assert_eq!(report.page_count, 0);
        assert_eq!(report.address, "93.184.216.34");
        assert_eq!(
            report.findings,
            [format!("Error checking vulnerabilities: {STUB_MESSAGE}")]
        );
        assert!(report.ownership.is_error());

        // Page counter and heuristic scanner fetch separately, then the registry.
        let urls: Vec<String> = fetcher.calls().into_iter().map(|(url, _)| url).collect();
        assert_eq!(
            urls,
            [
                "https://example.com",
                "https://example.com",
                "https://whoisjsonapi.com/api/v1/whois?domain=example.com",
            ]
        );
    }

    #[tokio::test]
    async fn full_report_operation_persists_artifact() {
        let dir = tempdir().unwrap();
        let fetcher = Arc::new(StubFetcher::new().fail("https://", STUB_MESSAGE));
        let mut ctx = context(fetcher, StubResolver::Address("93.184.216.34".into()));
        ctx.report_dir = dir.path().to_path_buf();

        let outcome = run_operation(&ctx, Operation::FullReport, "example.com").await.unwrap();
        let Outcome::Report { path, report } = outcome else {
            panic!("expected a report outcome");
        };

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(path.starts_with(std::path::absolute(dir.path()).unwrap()));
        assert_eq!(written, report.render(Locale::En));
        for marker in [
            "TraçuS Report - ",
            "URL analyzed: https://example.com",
            "Number of pages found: 0",
            "Site IP: 93.184.216.34",
            "Detected vulnerabilities:",
            "Owner information:",
        ] {
            assert!(written.contains(marker), "missing {marker:?}");
        }
    }

    #[tokio::test]
    async fn unwritable_report_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let mut ctx = context(Arc::new(StubFetcher::new()), StubResolver::Fail("down".into()));
        ctx.report_dir = blocker;

        let result = run_operation(&ctx, Operation::FullReport, "example.com").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn single_operations_return_their_collector_result() {
        let fetcher = Arc::new(
            StubFetcher::new().route("https://example.com", r#"<a href="/a">a</a><a href="/b">b</a>"#),
        );
        let ctx = context(fetcher, StubResolver::Address("10.0.0.1".into()));

        match run_operation(&ctx, Operation::CountPages, "example.com").await.unwrap() {
            Outcome::PageCount(result) => assert_eq!(result, CollectorResult::Ok(2)),
            other => panic!("unexpected outcome {other:?}"),
        }
        match run_operation(&ctx, Operation::ResolveAddress, "https://example.com/x").await.unwrap() {
            Outcome::Address(result) => assert_eq!(result.value(), "10.0.0.1"),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
