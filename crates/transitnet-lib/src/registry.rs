use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// Numeric identifier for a station.
pub type StationId = i64;

/// First identifier handed out by a fresh registry.
pub const FIRST_STATION_ID: StationId = 10;

/// Minimum Jaro-Winkler similarity for a label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Bidirectional mapping between station labels and identifiers.
///
/// Identifiers are assigned sequentially in first-seen order starting at
/// [`FIRST_STATION_ID`] and are never reused. The registry is owned by the
/// graph builder and frozen together with the graph once construction ends.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    next_id: StationId,
    label_to_id: HashMap<String, StationId>,
    id_to_label: BTreeMap<StationId, String>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self {
            next_id: FIRST_STATION_ID,
            label_to_id: HashMap::new(),
            id_to_label: BTreeMap::new(),
        }
    }

    /// Return the identifier for `label`, allocating the next one if the label is new.
    pub fn assign(&mut self, label: &str) -> StationId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.label_to_id.insert(label.to_string(), id);
        self.id_to_label.insert(id, label.to_string());
        id
    }

    /// Lookup the label assigned to `id`.
    pub fn resolve(&self, id: StationId) -> Result<&str> {
        self.id_to_label
            .get(&id)
            .map(String::as_str)
            .ok_or(Error::UnknownStationId { id })
    }

    /// Lookup a station identifier by its case-sensitive label.
    pub fn id_of(&self, label: &str) -> Option<StationId> {
        self.label_to_id.get(label).copied()
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.id_to_label.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.id_to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_label.is_empty()
    }

    /// Iterate `(id, label)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &str)> {
        self.id_to_label
            .iter()
            .map(|(id, label)| (*id, label.as_str()))
    }

    /// Suggest up to `limit` known labels that resemble `label`.
    ///
    /// Matching is case-insensitive and ranked by Jaro-Winkler similarity.
    pub fn fuzzy_matches(&self, label: &str, limit: usize) -> Vec<String> {
        let needle = label.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .label_to_id
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_is_sequential_from_base() {
        let mut registry = StationRegistry::new();
        assert_eq!(registry.assign("Alpha"), FIRST_STATION_ID);
        assert_eq!(registry.assign("Beta"), FIRST_STATION_ID + 1);
        assert_eq!(registry.assign("Alpha"), FIRST_STATION_ID);
        assert_eq!(registry.assign("Gamma"), FIRST_STATION_ID + 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn resolve_round_trips_labels() {
        let mut registry = StationRegistry::new();
        let id = registry.assign("Rajiv Chowk~BY");
        assert_eq!(registry.resolve(id).unwrap(), "Rajiv Chowk~BY");
        assert_eq!(registry.id_of("Rajiv Chowk~BY"), Some(id));
    }

    #[test]
    fn resolve_unknown_id_fails() {
        let registry = StationRegistry::new();
        let err = registry.resolve(9999).expect_err("nothing assigned");
        assert!(matches!(err, Error::UnknownStationId { id: 9999 }));
    }

    #[test]
    fn iter_follows_first_seen_order() {
        let mut registry = StationRegistry::new();
        registry.assign("Zeta");
        registry.assign("Alpha");
        let labels: Vec<_> = registry.iter().map(|(_, label)| label).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn fuzzy_matches_rank_close_labels_first() {
        let mut registry = StationRegistry::new();
        registry.assign("Saket~Y");
        registry.assign("AIIMS~Y");
        registry.assign("Moti Nagar~B");

        let matches = registry.fuzzy_matches("saket", 3);
        assert_eq!(matches.first().map(String::as_str), Some("Saket~Y"));
        assert!(registry.fuzzy_matches("zzzzzz", 3).is_empty());
    }
}
