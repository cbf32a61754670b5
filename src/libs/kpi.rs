//! Indicators of the manual-index screen.

use super::manual::ManualEntry;
use serde::Serialize;

/// Number of drivers kept in the occurrence ranking.
pub const TOP_DRIVERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverCount {
    pub driver: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualKpis {
    pub total_rework_minutes: u64,
    pub total_occurrences: usize,
    pub top_drivers: Vec<DriverCount>,
}

impl ManualKpis {
    pub fn compute(entries: &[ManualEntry]) -> Self {
        let total_rework_minutes = entries.iter().map(|e| u64::from(e.rework_time_minutes())).sum();

        // Insertion order is kept so the stable sort below breaks ties by
        // first appearance.
        let mut counts: Vec<DriverCount> = Vec::new();
        for entry in entries {
            match counts.iter_mut().find(|c| c.driver == entry.driver) {
                Some(count) => count.occurrences += 1,
                None => counts.push(DriverCount {
                    driver: entry.driver.clone(),
                    occurrences: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        counts.truncate(TOP_DRIVERS);

        ManualKpis {
            total_rework_minutes,
            total_occurrences: entries.len(),
            top_drivers: counts,
        }
    }
}

/// Entries ordered newest first, as listed and exported.
pub fn newest_first(entries: &[ManualEntry]) -> Vec<&ManualEntry> {
    let mut sorted: Vec<&ManualEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::manual::{DriverType, ManualReason, NewManualEntry};
    use chrono::NaiveDate;

    fn entry(driver: &str, unscanned: u32, timestamp: i64) -> ManualEntry {
        let input = NewManualEntry::parse(driver, "ABC1234", DriverType::Telog, 10, unscanned, ManualReason::Other).unwrap();
        ManualEntry::new(timestamp.to_string(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), timestamp, input)
    }

    #[test]
    fn totals_and_ranking() {
        let entries = vec![
            entry("Ana", 1, 5),
            entry("Bruno", 2, 4),
            entry("Carla", 3, 3),
            entry("Bruno", 4, 2),
            entry("Davi", 0, 1),
        ];
        let kpis = ManualKpis::compute(&entries);
        assert_eq!(kpis.total_occurrences, 5);
        assert_eq!(kpis.total_rework_minutes, 20);

        let ranking: Vec<_> = kpis.top_drivers.iter().map(|c| (c.driver.as_str(), c.occurrences)).collect();
        assert_eq!(ranking, vec![("Bruno", 2), ("Ana", 1), ("Carla", 1)]);
    }

    #[test]
    fn empty_set() {
        let kpis = ManualKpis::compute(&[]);
        assert_eq!(kpis.total_occurrences, 0);
        assert_eq!(kpis.total_rework_minutes, 0);
        assert!(kpis.top_drivers.is_empty());
    }

    #[test]
    fn newest_first_orders_by_timestamp() {
        let entries = vec![entry("Ana", 1, 1), entry("Bruno", 1, 3), entry("Carla", 1, 2)];
        let drivers: Vec<_> = newest_first(&entries).iter().map(|e| e.driver.as_str()).collect();
        assert_eq!(drivers, vec!["Bruno", "Carla", "Ana"]);
    }
}
