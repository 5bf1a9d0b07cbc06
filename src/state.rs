//! The explicit pipeline-state owner. Every stage's input and output flows
//! through this struct instead of ambient shared variables: the canonical
//! record set (replaced wholesale per load cycle), the active criteria and
//! sort key, and the favorite set.

use crate::domain::{DegradeReason, FilterCriteria, LoadOutcome, Record, SortKey};
use crate::favorites::FavoritesStore;
use crate::pipeline::{filter, sort};

#[derive(Debug, Default)]
pub struct ExplorerState {
    records: Vec<Record>,
    degraded: Option<DegradeReason>,
    criteria: FilterCriteria,
    sort_key: SortKey,
    favorites: FavoritesStore,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the outcome of a load cycle, replacing the previous record
    /// set wholesale. Criteria, sort key and favorites survive reloads.
    pub fn replace(&mut self, outcome: LoadOutcome) {
        self.degraded = outcome.degrade_reason();
        self.records = outcome.into_records();
    }

    /// The canonical (unfiltered) record set in rank order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Why the current record set is placeholder-filled, if it is.
    pub fn degraded(&self) -> Option<DegradeReason> {
        self.degraded
    }

    /// Replaces the criteria wholesale; partial patching is not offered so
    /// stale constraints cannot linger.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn clear_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The record sequence the view layer renders: the canonical set run
    /// through the filter engine, then the sort engine.
    pub fn visible(&self) -> Vec<Record> {
        sort::sort(filter::filter(&self.records, &self.criteria), self.sort_key)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{record_id, FreeSchemeStatus};

    fn record(rank: u32, name: &str, district: &str, tuition: &str) -> Record {
        Record {
            id: record_id(rank),
            rank,
            canonical_key: format!("KINDERGARTEN {rank}"),
            localized_name: name.to_string(),
            district: district.to_string(),
            tuition_text: tuition.to_string(),
            phone: String::new(),
            address: String::new(),
            website: String::new(),
            free_scheme: FreeSchemeStatus::Unknown,
            teaching_language: String::new(),
            gender: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn replace_swaps_the_record_set_wholesale() {
        let mut state = ExplorerState::new();
        state.replace(LoadOutcome::Live(vec![record(1, "甲", "東區", "免費")]));
        assert_eq!(state.records().len(), 1);
        assert!(state.degraded().is_none());

        state.replace(LoadOutcome::Degraded(
            vec![record(1, "待查", "待查", "待查"), record(2, "待查", "待查", "待查")],
            DegradeReason::Transport,
        ));
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.degraded(), Some(DegradeReason::Transport));
    }

    #[test]
    fn visible_applies_filter_then_sort() {
        let mut state = ExplorerState::new();
        state.replace(LoadOutcome::Live(vec![
            record(1, "甲校", "東區", "$3,000"),
            record(2, "乙校", "東區", "免費"),
            record(3, "丙校", "南區", "$100"),
        ]));
        state.set_criteria(FilterCriteria {
            district: "東區".to_string(),
            ..Default::default()
        });
        state.set_sort_key(SortKey::TuitionAsc);

        let visible = state.visible();
        let ranks: Vec<u32> = visible.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![2, 1]);
    }

    #[test]
    fn clear_criteria_restores_the_identity_filter() {
        let mut state = ExplorerState::new();
        state.replace(LoadOutcome::Live(vec![
            record(1, "甲校", "東區", "免費"),
            record(2, "乙校", "南區", "免費"),
        ]));
        state.set_criteria(FilterCriteria {
            search: "甲".to_string(),
            ..Default::default()
        });
        assert_eq!(state.visible().len(), 1);
        state.clear_criteria();
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn favorites_survive_reloads() {
        let mut state = ExplorerState::new();
        state.replace(LoadOutcome::Live(vec![record(1, "甲校", "東區", "免費")]));
        assert!(state.toggle_favorite("kg-001"));
        state.replace(LoadOutcome::Live(vec![record(1, "甲校", "東區", "免費")]));
        assert!(state.is_favorite("kg-001"));
    }
}
