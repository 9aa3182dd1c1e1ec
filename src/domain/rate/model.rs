//! Rate domain entity and history resolution

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A single price record. Immutable once created; changing a service's price
/// means appending a new Rate with its own effective date.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    pub id: i32,
    /// Non-negative price value
    pub value: Decimal,
    /// Instant from which this rate applies (may be in the future)
    pub effective_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,

    pub service_id: i32,
    pub service_type_id: i32,
    pub region_id: i32,
}

/// A service's full rate history, in creation order.
///
/// Resolution rules:
/// - the rate in force at `as_of` is the entry with the latest
///   `effective_from <= as_of`; entries sharing an effective instant are
///   resolved last-created-wins;
/// - the next scheduled rate after `as_of` is the entry with the earliest
///   `effective_from > as_of`, degrading to the current rate when nothing
///   is scheduled.
#[derive(Debug, Clone, Default)]
pub struct RateHistory {
    entries: Vec<Rate>,
}

impl RateHistory {
    /// `entries` must be in creation order (ascending id); repositories
    /// return them that way.
    pub fn new(entries: Vec<Rate>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Rate] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The rate in force at `as_of`, if any rate has taken effect by then.
    pub fn current_as_of(&self, as_of: DateTime<Utc>) -> Option<&Rate> {
        let mut best: Option<&Rate> = None;
        for entry in &self.entries {
            if entry.effective_from > as_of {
                continue;
            }
            match best {
                // equal instants fall through, so a later-created entry
                // wins an exact tie
                Some(b) if entry.effective_from < b.effective_from => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// The earliest rate scheduled strictly after `as_of`, falling back to
    /// the current rate so callers always get an applicable entry when one
    /// exists at all.
    pub fn next_after(&self, as_of: DateTime<Utc>) -> Option<&Rate> {
        let mut best: Option<&Rate> = None;
        for entry in &self.entries {
            if entry.effective_from <= as_of {
                continue;
            }
            match best {
                Some(b) if entry.effective_from >= b.effective_from => {}
                _ => best = Some(entry),
            }
        }
        best.or_else(|| self.current_as_of(as_of))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn rate(id: i32, value: &str, effective_from: DateTime<Utc>) -> Rate {
        Rate {
            id,
            value: value.parse().unwrap(),
            effective_from,
            created_at: Utc::now(),
            service_id: 1,
            service_type_id: 1,
            region_id: 1,
        }
    }

    #[test]
    fn empty_history_has_no_current_rate() {
        let history = RateHistory::default();
        assert!(history.current_as_of(Utc::now()).is_none());
        assert!(history.next_after(Utc::now()).is_none());
    }

    #[test]
    fn current_picks_latest_effective_at_or_before() {
        let now = Utc::now();
        let history = RateHistory::new(vec![
            rate(1, "0.3", now - Duration::days(3)),
            rate(2, "0.5", now),
            rate(3, "0.6", now + Duration::days(3)),
        ]);
        assert_eq!(history.current_as_of(now).unwrap().value, "0.5".parse().unwrap());
    }

    #[test]
    fn next_picks_earliest_strictly_future() {
        let now = Utc::now();
        let history = RateHistory::new(vec![
            rate(1, "0.3", now - Duration::days(3)),
            rate(2, "0.5", now),
            rate(3, "0.6", now + Duration::days(3)),
            rate(4, "0.9", now + Duration::days(10)),
        ]);
        assert_eq!(history.next_after(now).unwrap().value, "0.6".parse().unwrap());
    }

    #[test]
    fn next_falls_back_to_current_when_nothing_scheduled() {
        let now = Utc::now();
        let history = RateHistory::new(vec![
            rate(1, "0.3", now - Duration::days(3)),
            rate(2, "0.5", now - Duration::days(1)),
        ]);
        assert_eq!(history.next_after(now).unwrap().value, "0.5".parse().unwrap());
    }

    #[test]
    fn insertion_order_does_not_matter_for_selection() {
        let now = Utc::now();
        // Appended out of effective order, as callers are allowed to do
        let history = RateHistory::new(vec![
            rate(1, "0.6", now + Duration::days(3)),
            rate(2, "0.3", now - Duration::days(3)),
            rate(3, "0.5", now - Duration::days(1)),
        ]);
        assert_eq!(history.current_as_of(now).unwrap().value, "0.5".parse().unwrap());
        assert_eq!(history.next_after(now).unwrap().value, "0.6".parse().unwrap());
    }

    #[test]
    fn equal_effective_instants_resolve_last_created_wins() {
        let now = Utc::now();
        let effective = now - Duration::days(1);
        let history = RateHistory::new(vec![
            rate(1, "0.4", effective),
            rate(2, "0.7", effective),
        ]);
        let current = history.current_as_of(now).unwrap();
        assert_eq!(current.id, 2);
        assert_eq!(current.value, "0.7".parse().unwrap());
    }

    #[test]
    fn equal_future_instants_resolve_first_created_wins() {
        let now = Utc::now();
        let effective = now + Duration::days(1);
        let history = RateHistory::new(vec![
            rate(1, "0.4", effective),
            rate(2, "0.7", effective),
        ]);
        assert_eq!(history.next_after(now).unwrap().id, 1);
    }

    #[test]
    fn current_at_arbitrary_past_instant() {
        let now = Utc::now();
        let history = RateHistory::new(vec![
            rate(1, "0.3", now - Duration::days(30)),
            rate(2, "0.5", now - Duration::days(10)),
            rate(3, "0.8", now),
        ]);
        let mid = now - Duration::days(20);
        assert_eq!(history.current_as_of(mid).unwrap().value, "0.3".parse().unwrap());
    }

    #[test]
    fn no_rate_in_force_before_first_effective_date() {
        let now = Utc::now();
        let history = RateHistory::new(vec![rate(1, "0.5", now + Duration::days(1))]);
        assert!(history.current_as_of(now).is_none());
        // but it is the next scheduled one
        assert_eq!(history.next_after(now).unwrap().id, 1);
    }

    #[test]
    fn boundary_is_inclusive_for_current() {
        let now = Utc::now();
        let history = RateHistory::new(vec![rate(1, "0.5", now)]);
        assert_eq!(history.current_as_of(now).unwrap().id, 1);
        // and exclusive for next
        assert_eq!(history.next_after(now).unwrap().id, 1); // fallback, not future
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let now = Utc::now();
        let history = RateHistory::new(vec![
            rate(1, "0.6", now + Duration::days(3)),
            rate(2, "0.3", now - Duration::days(3)),
        ]);
        let ids: Vec<i32> = history.entries().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
