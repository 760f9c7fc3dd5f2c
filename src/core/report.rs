// src/core/report.rs

use chrono::{DateTime, Local};
use rust_i18n::t;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::core::error::PersistenceError;
use crate::core::locale::Locale;
use crate::core::models::{CollectorResult, Finding, OwnershipRecord};
use crate::core::target::Target;

/// Everything gathered for one target, ready to be written out once.
#[derive(Debug, Clone)]
pub struct Report {
    pub target: Target,
    pub timestamp: DateTime<Local>,
    pub page_count: usize,
    pub address: String,
    pub findings: Vec<Finding>,
    pub ownership: OwnershipRecord,
}

impl Report {
    /// Merges collector results, stamped with the current time.
    ///
    /// Only values are kept: degraded results already carry readable
    /// diagnostics inside their sentinel values.
    pub fn assemble(
        target: Target,
        page_count: CollectorResult<usize>,
        address: CollectorResult<String>,
        findings: CollectorResult<Vec<Finding>>,
        ownership: CollectorResult<OwnershipRecord>,
    ) -> Self {
        Self {
            target,
            timestamp: Local::now(),
            page_count: page_count.into_value(),
            address: address.into_value(),
            findings: findings.into_value(),
            ownership: ownership.into_value(),
        }
    }

    /// Renders the fixed report layout. Downstream tools parse this, so the
    /// section order must not change.
    pub fn render(&self, locale: Locale) -> String {
        let lang = locale.code();
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f").to_string();
        let mut lines: Vec<String> = vec![
            t!("report.title", locale = lang, timestamp = timestamp).into_owned(),
            t!("report.url", locale = lang, url = &self.target.normalized_url).into_owned(),
            t!("report.pages", locale = lang, count = self.page_count).into_owned(),
            t!("report.address", locale = lang, address = &self.address).into_owned(),
            String::new(),
            t!("report.findings_header", locale = lang).into_owned(),
        ];
        lines.extend(self.findings.iter().map(|finding| format!("- {finding}")));
        lines.push(String::new());

        lines.push(t!("report.owner_header", locale = lang).into_owned());
        lines.extend(self.ownership.entries().map(|(key, value)| format!("{key}: {value}")));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn file_name(&self, locale: Locale) -> String {
        format!(
            "{}_{}.txt",
            t!("report.file_prefix", locale = locale.code()),
            self.timestamp.format("%Y%m%d_%H%M%S")
        )
    }

    /// Writes the report into `dir` and returns its absolute path.
    pub fn persist(&self, dir: &Path, locale: Locale) -> Result<PathBuf, PersistenceError> {
        fs::create_dir_all(dir).map_err(|source| PersistenceError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(self.file_name(locale));
        fs::write(&path, self.render(locale)).map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to write report.");
            PersistenceError::Write { path: path.clone(), source }
        })?;

        let absolute = std::path::absolute(&path).unwrap_or(path);
        info!(path = %absolute.display(), "Report saved.");
        Ok(absolute)
    }
}
