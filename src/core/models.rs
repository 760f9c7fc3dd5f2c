// src/core/models.rs

// --- Collector Results ---

/// Outcome of a single collector.
///
/// Collectors never abort a session. A failure is reported as `Degraded`,
/// which still carries a usable sentinel value alongside a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectorResult<T> {
    Ok(T),
    Degraded { value: T, message: String },
}

impl<T> CollectorResult<T> {
    pub fn degraded(value: T, message: impl Into<String>) -> Self {
        Self::Degraded { value, message: message.into() }
    }

    /// The carried value, whether the collector succeeded or not.
    pub fn value(&self) -> &T {
        match self {
            Self::Ok(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// The diagnostic message of a degraded result.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Degraded { message, .. } => Some(message),
        }
    }
}

// --- Heuristic Findings ---

/// A single human-readable observation about page content.
pub type Finding = String;

// --- Ownership ---

/// Field names of a successful ownership record, in report order.
pub const OWNERSHIP_FIELDS: [&str; 6] = [
    "Domain",
    "Registrar",
    "Creation Date",
    "Expiration Date",
    "Name Servers",
    "Status",
];

/// Keys that mark a record as an error placeholder rather than registry data.
pub const OWNERSHIP_ERROR_KEYS: [&str; 2] = ["Error", "Erro"];

/// Ordered key/value view of a domain's registration data.
///
/// Either holds the six `OWNERSHIP_FIELDS` in order, or a single error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipRecord {
    entries: Vec<(String, String)>,
}

impl OwnershipRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the single-entry record used when the lookup failed.
    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self { entries: vec![(key.into(), message.into())] }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the record only carries a lookup failure.
    pub fn is_error(&self) -> bool {
        self.entries
            .iter()
            .any(|(k, _)| OWNERSHIP_ERROR_KEYS.contains(&k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_result_keeps_value_and_message() {
        let result = CollectorResult::degraded(0usize, "connection refused");
        assert!(result.is_degraded());
        assert_eq!(*result.value(), 0);
        assert_eq!(result.message(), Some("connection refused"));
        assert_eq!(result.into_value(), 0);
    }

    #[test]
    fn ok_result_has_no_message() {
        let result = CollectorResult::Ok("93.184.216.34".to_string());
        assert!(!result.is_degraded());
        assert_eq!(result.message(), None);
        assert_eq!(result.value(), "93.184.216.34");
    }

    #[test]
    fn ownership_record_preserves_insertion_order() {
        let mut record = OwnershipRecord::new();
        for field in OWNERSHIP_FIELDS {
            record.push(field, "Unknown");
        }
        let keys: Vec<&str> = record.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, OWNERSHIP_FIELDS);
        assert!(!record.is_error());
    }

    #[test]
    fn error_record_is_flagged_in_both_languages() {
        let english = OwnershipRecord::error("Error", "Could not fetch owner info: boom");
        let portuguese = OwnershipRecord::error("Erro", "Não foi possível obter informações do responsável: boom");
        assert!(english.is_error());
        assert!(portuguese.is_error());
        assert_eq!(english.len(), 1);
        assert_eq!(english.get("Domain"), None);
    }
}
