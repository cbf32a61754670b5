//! Date-range and text filtering over day records.

use super::record::DayRecord;
use chrono::NaiveDate;

/// Active filters of the conference view.
///
/// Every field is optional and an absent field filters nothing. The date
/// bounds are inclusive; the search text matches driver or plate,
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub search: Option<String>,
}

impl DayFilter {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>, search: Option<String>) -> Self {
        Self { start, end, search }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.query().is_none()
    }

    /// The search text in lowercase, or `None` when blank.
    fn query(&self) -> Option<String> {
        self.search.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_lowercase)
    }

    fn in_range(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Applies the filters, keeping the relative order of days and records.
    ///
    /// When a search text is present, each day keeps only its matching
    /// records and days left without records are dropped.
    pub fn apply(&self, days: &[DayRecord]) -> Vec<DayRecord> {
        let in_range = days.iter().filter(|day| self.in_range(day.date));

        let Some(query) = self.query() else {
            return in_range.cloned().collect();
        };

        in_range
            .filter_map(|day| {
                let records: Vec<_> = day
                    .records
                    .iter()
                    .filter(|r| r.driver.to_lowercase().contains(&query) || r.plate.to_lowercase().contains(&query))
                    .cloned()
                    .collect();
                (!records.is_empty()).then(|| DayRecord { date: day.date, records })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::record::VehicleRecord;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn record(plate: &str, driver: &str) -> VehicleRecord {
        VehicleRecord {
            id: format!("{}-{}", plate, driver),
            plate: plate.to_string(),
            driver: driver.to_string(),
            invoice_count: 1,
            timestamp: 0,
        }
    }

    fn days() -> Vec<DayRecord> {
        vec![
            DayRecord { date: date(12), records: vec![record("ABC-1234", "John"), record("XYZ-9876", "Maria")] },
            DayRecord { date: date(11), records: vec![record("DEF-5555", "Pedro")] },
            DayRecord { date: date(10), records: vec![] },
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        assert_eq!(DayFilter::default().apply(&days()), days());
        assert!(DayFilter::new(None, None, Some("   ".into())).is_empty());
        assert_eq!(DayFilter::new(None, None, Some("   ".into())).apply(&days()), days());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let filtered = DayFilter::new(Some(date(11)), Some(date(12)), None).apply(&days());
        let dates: Vec<_> = filtered.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(12), date(11)]);
    }

    #[test]
    fn search_filters_records_and_drops_empty_days() {
        let filtered = DayFilter::new(None, None, Some("maria".into())).apply(&days());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].records.len(), 1);
        assert_eq!(filtered[0].records[0].driver, "Maria");

        let by_plate = DayFilter::new(None, None, Some("def-5".into())).apply(&days());
        assert_eq!(by_plate.len(), 1);
        assert_eq!(by_plate[0].date, date(11));
    }

    #[test]
    fn date_and_search_compose() {
        let filtered = DayFilter::new(Some(date(11)), Some(date(11)), Some("john".into())).apply(&days());
        assert!(filtered.is_empty());
    }
}
