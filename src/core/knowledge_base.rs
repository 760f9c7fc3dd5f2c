//! The heuristic rule table.
//!
//! Each rule pairs a keyword with the finding it produces. Rules are plain
//! data: the built-in ones are listed below by message id, and operators can
//! append their own from `config.toml` without touching the scanner.

use rust_i18n::t;
use serde::{Deserialize, Serialize};

use crate::core::locale::Locale;
use crate::core::models::Finding;

/// Keyword and finding message of a single heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicRule {
    pub keyword: String,
    pub message: String,
}

impl HeuristicRule {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), message: message.into() }
    }
}

/// Built-in rules as `(keyword, message id)`, in evaluation order.
static BUILTIN_RULES: &[(&str, &str)] = &[
    ("admin", "heuristics.admin_area"),
    ("password", "heuristics.password_exposure"),
    ("error", "heuristics.visible_errors"),
];

/// An ordered list of heuristics evaluated against a page body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<HeuristicRule>,
}

impl RuleSet {
    /// The built-in rules with their messages resolved for `locale`.
    pub fn builtin(locale: Locale) -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|&(keyword, id)| HeuristicRule::new(keyword, t!(id, locale = locale.code())))
            .collect();
        Self { rules }
    }

    /// Appends extra rules after the existing ones.
    pub fn with_rules(mut self, extra: impl IntoIterator<Item = HeuristicRule>) -> Self {
        self.rules.extend(extra);
        self
    }

    pub fn rules(&self) -> &[HeuristicRule] {
        &self.rules
    }

    /// Returns the message of every rule whose keyword occurs in `body`.
    ///
    /// Matching is case-insensitive and every rule is checked; an empty result
    /// means nothing fired.
    pub fn evaluate(&self, body: &str) -> Vec<Finding> {
        let content = body.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| content.contains(&rule.keyword.to_lowercase()))
            .map(|rule| rule.message.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_keep_their_order() {
        let rules = RuleSet::builtin(Locale::En);
        let keywords: Vec<&str> = rules
            .rules()
            .iter()
            .map(|r| r.keyword.as_str())
            .collect();
        assert_eq!(keywords, ["admin", "password", "error"]);
    }

    #[test]
    fn every_matching_rule_fires() {
        let rules = RuleSet::builtin(Locale::En);
        let findings = rules.evaluate("<p>Admin login: enter your password. Error 500</p>");
        assert_eq!(
            findings,
            [
                "Page may contain exposed admin area",
                "Possible password exposure in text",
                "Pages with visible error messages",
            ]
        );
    }

    #[test]
    fn matching_ignores_case() {
        let findings = RuleSet::builtin(Locale::En).evaluate("RESET YOUR PASSWORD");
        assert_eq!(findings, ["Possible password exposure in text"]);
    }

    #[test]
    fn nothing_fires_on_clean_body() {
        assert!(RuleSet::builtin(Locale::En).evaluate("<h1>Hello</h1>").is_empty());
    }

    #[test]
    fn extra_rules_are_appended_and_matched_lowercased() {
        let rules = RuleSet::builtin(Locale::En)
            .with_rules([HeuristicRule::new("PhpMyAdmin", "phpMyAdmin panel referenced")]);
        assert_eq!(rules.rules().len(), 4);
        let findings = rules.evaluate("see /phpmyadmin/");
        assert_eq!(
            findings,
            ["Page may contain exposed admin area", "phpMyAdmin panel referenced"]
        );
    }

    #[test]
    fn portuguese_messages_resolve() {
        let findings = RuleSet::builtin(Locale::Pt).evaluate("admin");
        assert_eq!(findings, ["Página pode conter área administrativa exposta"]);
    }
}
