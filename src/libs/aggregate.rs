//! Period rollups behind the conference chart.
//!
//! Days are grouped into daily, ISO-week or calendar-month buckets and each
//! bucket carries the vehicle and invoice totals of its days. Buckets always
//! come out in chronological order, whatever the order of the input.

use super::formatter::month_abbr;
use super::record::DayRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ChartPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub vehicles: usize,
    pub invoices: u64,
}

/// Sortable bucket identity: `(year, sub-period, day)`.
type BucketKey = (i32, u32, u32);

fn bucket_key(date: NaiveDate, period: ChartPeriod) -> BucketKey {
    match period {
        ChartPeriod::Daily => (date.year(), date.month(), date.day()),
        ChartPeriod::Weekly => {
            let week = date.iso_week();
            (week.year(), week.week(), 0)
        }
        ChartPeriod::Monthly => (date.year(), date.month(), 0),
    }
}

fn bucket_label(date: NaiveDate, period: ChartPeriod) -> String {
    match period {
        ChartPeriod::Daily => format!("{}/{}", date.day(), date.month()),
        ChartPeriod::Weekly => format!("Week {}", date.iso_week().week()),
        ChartPeriod::Monthly => format!("{}/{}", month_abbr(date), date.format("%y")),
    }
}

/// Groups `days` by `period`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use logicheck::libs::aggregate::{aggregate, ChartPeriod};
/// use logicheck::libs::record::DayRecord;
///
/// let days = vec![DayRecord::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())];
/// let buckets = aggregate(&days, ChartPeriod::Monthly);
/// assert_eq!(buckets[0].label, "Jan/25");
/// ```
pub fn aggregate(days: &[DayRecord], period: ChartPeriod) -> Vec<Bucket> {
    let mut buckets: BTreeMap<BucketKey, Bucket> = BTreeMap::new();

    for day in days {
        let bucket = buckets.entry(bucket_key(day.date, period)).or_insert_with(|| Bucket {
            label: bucket_label(day.date, period),
            vehicles: 0,
            invoices: 0,
        });
        bucket.vehicles += day.vehicle_count();
        bucket.invoices += day.invoice_count();
    }

    buckets.into_values().collect()
}
