//! Map Filter Module
//! Filter state, matching and option lists shared with the embedded script.

use crate::data::RentRecord;
use serde::Serialize;

/// Option value that disables a filter.
pub const ALL: &str = "all";

/// One filter control: everything, or a single value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

/// Active state of the two map controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub pieces: Selection<u32>,
    pub type_location: Selection<String>,
}

impl FilterState {
    /// State after the reset control: both filters on "all".
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn matches(&self, record: &RentRecord) -> bool {
        self.pieces.accepts(&record.pieces) && self.type_location.accepts(&record.type_location)
    }
}

/// Records visible on the map under `filter`, in dataset order.
pub fn visible_subset<'a>(dataset: &'a [RentRecord], filter: &FilterState) -> Vec<&'a RentRecord> {
    dataset.iter().filter(|r| filter.matches(r)).collect()
}

/// Values offered by each select control, `"all"` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub pieces: Vec<String>,
    pub type_location: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &[RentRecord]) -> Self {
        let mut pieces: Vec<u32> = dataset.iter().map(|r| r.pieces).collect();
        pieces.sort_unstable();
        pieces.dedup();

        let mut types: Vec<&str> = dataset.iter().map(|r| r.type_location.as_str()).collect();
        types.sort_unstable();
        types.dedup();

        Self {
            pieces: std::iter::once(ALL.to_string())
                .chain(pieces.iter().map(|p| p.to_string()))
                .collect(),
            type_location: std::iter::once(ALL)
                .chain(types)
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pieces: u32, type_location: &str) -> RentRecord {
        RentRecord {
            quartier: "Bastille".to_string(),
            pieces,
            loyer: 25.0,
            latitude: 48.85,
            longitude: 2.37,
            type_location: type_location.to_string(),
        }
    }

    fn sample() -> Vec<RentRecord> {
        vec![
            record(2, "non meublé"),
            record(10, "meublé"),
            record(1, "meublé"),
            record(2, "meublé"),
        ]
    }

    #[test]
    fn options_are_sorted_unique_with_all_first() {
        let options = FilterOptions::from_dataset(&sample());
        assert_eq!(options.pieces, vec!["all", "1", "2", "10"]);
        assert_eq!(options.type_location, vec!["all", "meublé", "non meublé"]);
    }

    #[test]
    fn empty_dataset_still_offers_all() {
        let options = FilterOptions::from_dataset(&[]);
        assert_eq!(options.pieces, vec![ALL]);
        assert_eq!(options.type_location, vec![ALL]);
    }

    #[test]
    fn default_state_shows_everything() {
        let data = sample();
        assert_eq!(visible_subset(&data, &FilterState::default()).len(), data.len());
    }

    #[test]
    fn both_filters_must_match() {
        let data = sample();
        let filter = FilterState {
            pieces: Selection::Only(2),
            type_location: Selection::Only("meublé".to_string()),
        };

        let visible = visible_subset(&data, &filter);
        assert_eq!(visible, vec![&data[3]]);
    }

    #[test]
    fn single_filter_leaves_other_open() {
        let data = sample();
        let filter = FilterState {
            pieces: Selection::All,
            type_location: Selection::Only("meublé".to_string()),
        };
        assert_eq!(visible_subset(&data, &filter).len(), 3);
    }

    #[test]
    fn unmatched_combination_is_empty_and_reset_restores() {
        let data = sample();
        let filter = FilterState {
            pieces: Selection::Only(10),
            type_location: Selection::Only("non meublé".to_string()),
        };
        assert!(visible_subset(&data, &filter).is_empty());
        assert_eq!(visible_subset(&data, &FilterState::reset()).len(), 4);
    }
}
