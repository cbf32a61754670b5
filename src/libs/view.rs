use super::aggregate::Bucket;
use super::formatter::{format_clock, format_date, format_minutes, weekday_name};
use super::kpi::{newest_first, ManualKpis};
use super::manual::ManualEntry;
use super::profile::UserProfile;
use super::record::{DayRecord, GlobalStats};
use anyhow::Result;
use prettytable::{row, Table};

/// Width of the longest chart bar, in characters.
const BAR_WIDTH: usize = 40;

pub struct View {}

impl View {
    pub fn days(days: &[DayRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "WEEKDAY", "VEHICLES", "INVOICES"]);
        for day in days {
            table.add_row(row![format_date(day.date), weekday_name(day.date), day.vehicle_count(), day.invoice_count()]);
        }
        table.printstd();

        Ok(())
    }

    /// Records of one day, newest first.
    pub fn records(day: &DayRecord) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "PLATE", "DRIVER", "INVOICES", "ID"]);
        for record in day.newest_first() {
            table.add_row(row![format_clock(record.timestamp), record.plate, record.driver, record.invoice_count, record.id]);
        }
        table.add_row(row!["", "", "TOTAL", day.invoice_count(), ""]);
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &GlobalStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VEHICLES", "INVOICES"]);
        table.add_row(row![stats.vehicles, stats.invoices]);
        table.printstd();

        Ok(())
    }

    pub fn manual_entries(entries: &[ManualEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DRIVER", "LINK", "PLATE", "NFS (MAN/TOT)", "REASON", "TIME", "ID"]);
        for entry in newest_first(entries) {
            table.add_row(row![
                format_date(entry.date),
                entry.driver,
                entry.driver_type_label(),
                entry.plate,
                entry.nfs_label(),
                entry.reason,
                format_minutes(u64::from(entry.rework_time_minutes())),
                entry.id
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn kpis(kpis: &ManualKpis) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["REWORK TIME", "OCCURRENCES", "TOP DRIVERS"]);
        let ranking = kpis
            .top_drivers
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {} ({})", i + 1, c.driver, c.occurrences))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(row![format_minutes(kpis.total_rework_minutes), kpis.total_occurrences, ranking]);
        table.printstd();

        Ok(())
    }

    pub fn chart(buckets: &[Bucket]) -> Result<()> {
        let max_vehicles = buckets.iter().map(|b| b.vehicles as u64).max().unwrap_or(0);
        let max_invoices = buckets.iter().map(|b| b.invoices).max().unwrap_or(0);

        let mut table = Table::new();
        table.add_row(row!["PERIOD", "VEHICLES", "", "INVOICES", ""]);
        for bucket in buckets {
            table.add_row(row![
                bucket.label,
                bucket.vehicles,
                bar(bucket.vehicles as u64, max_vehicles, '█'),
                bucket.invoices,
                bar(bucket.invoices, max_invoices, '▒')
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn profile(profile: &UserProfile) -> Result<()> {
        let mut table = Table::new();

        let photo = match &profile.photo {
            Some(url) => format!("{} bytes", url.len()),
            None => "-".to_string(),
        };
        let password = if profile.password.is_some() { "custom" } else { "default" };
        table.add_row(row!["NAME", profile.name]);
        table.add_row(row!["EMAIL", profile.email]);
        table.add_row(row!["PHOTO", photo]);
        table.add_row(row!["PASSWORD", password]);
        table.printstd();

        Ok(())
    }
}

/// Horizontal bar for `value` scaled against `max`.
pub fn bar(value: u64, max: u64, fill: char) -> String {
    if max == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    std::iter::repeat_n(fill, len.max(usize::from(value > 0))).collect()
}
