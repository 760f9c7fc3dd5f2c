// src/core/locale.rs

use rust_i18n::t;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Language of every message the pipeline produces.
///
/// All user-facing text lives in `locales/*.yml`, keyed by message id; the
/// collectors only ever ask for ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// The next locale in declaration order, wrapping around.
    pub fn next(self) -> Self {
        Locale::iter()
            .cycle()
            .skip_while(|l| *l != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Sentinel used for any value a collector could not obtain.
    pub fn unknown(self) -> String {
        t!("collector.unknown", locale = self.code()).into_owned()
    }

    pub fn error_key(self) -> String {
        t!("collector.error_key", locale = self.code()).into_owned()
    }
}
