//! Configurable target-type vocabulary.
//!
//! Work items are classified into milestone/deliverable/goal buckets by
//! matching their free-text type label against these configured names, so
//! the vocabulary can vary per deployment (e.g. localized type names).
//! Parsed from a positional comma-separated override; any unspecified entry
//! keeps its default label.

use serde::{Deserialize, Serialize};

/// The display-label vocabulary used for work-item classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTypes {
    /// Milestone type label.
    pub milestone: String,
    /// Deliverable type label.
    pub deliverable: String,
    /// External goal type label.
    pub external_goal: String,
    /// Internal goal type label.
    pub internal_goal: String,
    /// Offer type label (reserved for display; not used in classification).
    pub offer: String,
}

impl Default for TargetTypes {
    fn default() -> Self {
        Self {
            milestone: "Milestone".to_string(),
            deliverable: "Deliverable".to_string(),
            external_goal: "Goal".to_string(),
            internal_goal: "Internal Goal".to_string(),
            offer: "Angebot".to_string(),
        }
    }
}

impl TargetTypes {
    /// Parses the positional comma-separated override. Blank entries are
    /// dropped before positions are assigned, matching the original
    /// configuration format.
    pub fn from_csv(input: Option<&str>) -> Self {
        let defaults = Self::default();
        let entries: Vec<String> = input
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        let pick = |index: usize, fallback: String| -> String {
            entries.get(index).cloned().unwrap_or(fallback)
        };

        Self {
            milestone: pick(0, defaults.milestone),
            deliverable: pick(1, defaults.deliverable),
            external_goal: pick(2, defaults.external_goal),
            internal_goal: pick(3, defaults.internal_goal),
            offer: pick(4, defaults.offer),
        }
    }

    /// The type names requested from the upstream work-package listing.
    pub fn upstream_whitelist(&self) -> [&str; 4] {
        [
            &self.milestone,
            &self.deliverable,
            &self.external_goal,
            &self.internal_goal,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let types = TargetTypes::default();
        assert_eq!(types.milestone, "Milestone");
        assert_eq!(types.deliverable, "Deliverable");
        assert_eq!(types.external_goal, "Goal");
        assert_eq!(types.internal_goal, "Internal Goal");
        assert_eq!(types.offer, "Angebot");
    }

    #[test]
    fn test_from_csv_none_is_default() {
        assert_eq!(TargetTypes::from_csv(None), TargetTypes::default());
    }

    #[test]
    fn test_from_csv_partial_override() {
        let types = TargetTypes::from_csv(Some("Meilenstein, Lieferung"));
        assert_eq!(types.milestone, "Meilenstein");
        assert_eq!(types.deliverable, "Lieferung");
        assert_eq!(types.external_goal, "Goal");
        assert_eq!(types.offer, "Angebot");
    }

    #[test]
    fn test_from_csv_blank_entries_dropped() {
        let types = TargetTypes::from_csv(Some(" , ,Ziel"));
        // Blanks are filtered before positions are assigned.
        assert_eq!(types.milestone, "Ziel");
        assert_eq!(types.deliverable, "Deliverable");
    }

    #[test]
    fn test_upstream_whitelist_order() {
        let types = TargetTypes::default();
        assert_eq!(
            types.upstream_whitelist(),
            ["Milestone", "Deliverable", "Goal", "Internal Goal"]
        );
    }
}
