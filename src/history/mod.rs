//! Brew history tracking.
//!
//! A [`BrewHistory`] is an ordered, immutable ledger of pulled shots.
//! It lives outside the machine, which owns nothing but its two
//! containers; callers thread a history alongside the machine they brew
//! on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::machine::Drink;

/// Record of a single pulled shot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrewRecord {
    /// The drink that was brewed
    pub drink: Drink,
    /// Litres of coffee produced
    pub litres: f64,
    /// When the shot was pulled
    pub timestamp: DateTime<Utc>,
}

impl BrewRecord {
    /// Record a shot of `drink` pulled now, at its recipe volume.
    pub fn new(drink: Drink) -> Self {
        Self {
            drink,
            litres: drink.recipe().litres,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of pulled shots.
///
/// History is immutable - `record` returns a new history with the shot
/// appended.
///
/// # Example
///
/// ```rust
/// use espresso::{BrewHistory, BrewRecord, Drink};
///
/// let history = BrewHistory::new();
/// let history = history.record(BrewRecord::new(Drink::Single));
/// let history = history.record(BrewRecord::new(Drink::Double));
///
/// assert_eq!(history.records().len(), 2);
/// assert_eq!(history.pulls(Drink::Double), 1);
/// assert!((history.total_litres() - 0.15).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BrewHistory {
    records: Vec<BrewRecord>,
}

impl BrewHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning the extended history. The original
    /// history is unchanged.
    pub fn record(&self, record: BrewRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded shots, oldest first (pure).
    pub fn records(&self) -> &[BrewRecord] {
        &self.records
    }

    /// The most recent shot, if any (pure).
    pub fn last(&self) -> Option<&BrewRecord> {
        self.records.last()
    }

    /// Total litres of coffee brewed (pure).
    pub fn total_litres(&self) -> f64 {
        self.records.iter().map(|r| r.litres).sum()
    }

    /// Number of shots pulled for a given drink (pure).
    pub fn pulls(&self, drink: Drink) -> usize {
        self.records.iter().filter(|r| r.drink == drink).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = BrewHistory::new();
        assert!(history.records().is_empty());
        assert!(history.last().is_none());
        assert_eq!(history.total_litres(), 0.0);
    }

    #[test]
    fn record_preserves_order() {
        let history = BrewHistory::new()
            .record(BrewRecord::new(Drink::Single))
            .record(BrewRecord::new(Drink::Double))
            .record(BrewRecord::new(Drink::Single));

        let drinks: Vec<Drink> = history.records().iter().map(|r| r.drink).collect();
        assert_eq!(drinks, vec![Drink::Single, Drink::Double, Drink::Single]);
        assert_eq!(history.last().unwrap().drink, Drink::Single);
    }

    #[test]
    fn record_does_not_mutate_the_original() {
        let history = BrewHistory::new();
        let extended = history.record(BrewRecord::new(Drink::Single));

        assert_eq!(history.records().len(), 0);
        assert_eq!(extended.records().len(), 1);
    }

    #[test]
    fn totals_follow_the_recipes() {
        let history = BrewHistory::new()
            .record(BrewRecord::new(Drink::Single))
            .record(BrewRecord::new(Drink::Single))
            .record(BrewRecord::new(Drink::Double));

        assert_eq!(history.pulls(Drink::Single), 2);
        assert_eq!(history.pulls(Drink::Double), 1);
        assert!((history.total_litres() - 0.20).abs() < 1e-9);
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = BrewHistory::new()
            .record(BrewRecord::new(Drink::Single))
            .record(BrewRecord::new(Drink::Double));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: BrewHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.records(), history.records());
    }
}
