//! Persisted detection state.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The durable record carried from one cycle to the next.
///
/// `available_identifiers` is replaced wholesale at the end of every
/// non-idle cycle, so identifiers that stop resolving as available drop out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Catalog-reported total at the last completed cycle. Only used as a
    /// wave trigger; never reconciled against the number of items fetched.
    #[serde(default)]
    pub last_total_count: u64,
    /// Identifiers confirmed available in the last completed cycle.
    #[serde(default)]
    pub available_identifiers: BTreeSet<String>,
    /// When the record was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Build a snapshot from a total and a set of identifiers.
    pub fn new<I, S>(last_total_count: u64, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            last_total_count,
            available_identifiers: available.into_iter().map(Into::into).collect(),
            updated_at: None,
        }
    }

    #[must_use]
    pub fn is_known_available(&self, id: &str) -> bool {
        self.available_identifiers.contains(id)
    }

    /// Snapshot that replaces this one at the end of a cycle.
    #[must_use]
    pub fn succeeded_by(&self, total: u64, available: BTreeSet<String>) -> Self {
        Self {
            last_total_count: total,
            available_identifiers: available,
            updated_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_replaces_instead_of_merging() {
        let prior = Snapshot::new(10, ["A", "B"]);
        let next = prior.succeeded_by(12, BTreeSet::from(["C".to_string()]));

        assert_eq!(next.last_total_count, 12);
        assert!(!next.is_known_available("A"));
        assert!(next.is_known_available("C"));
        assert!(next.updated_at.is_some());
    }

    #[test]
    fn serializes_identifiers_sorted() {
        let snapshot = Snapshot::new(3, ["b", "a", "c"]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"last_total_count":3,"available_identifiers":["a","b","c"]}"#
        );
    }

    #[test]
    fn missing_fields_default_to_zero_state() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
