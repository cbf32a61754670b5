//! Vehicle conference records and the per-day collections holding them.
//!
//! A [`DayRecord`] groups every vehicle checked on one calendar date. Records
//! are immutable once created; the only way to change one is to delete it and
//! add it again.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Number of alphanumeric characters in a complete plate.
pub const PLATE_CHARS: usize = 7;
/// Length of a complete masked plate, separator included.
pub const PLATE_LEN: usize = PLATE_CHARS + 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub plate: String,
    pub driver: String,
    pub invoice_count: u32,
    /// Creation instant in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub records: Vec<VehicleRecord>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        DayRecord { date, records: Vec::new() }
    }

    pub fn vehicle_count(&self) -> usize {
        self.records.len()
    }

    pub fn invoice_count(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.invoice_count)).sum()
    }

    /// Records ordered oldest first, the order used by printed reports.
    pub fn chronological(&self) -> Vec<&VehicleRecord> {
        let mut records: Vec<&VehicleRecord> = self.records.iter().collect();
        records.sort_by_key(|r| r.timestamp);
        records
    }

    /// Records ordered newest first, the order used on screen.
    pub fn newest_first(&self) -> Vec<&VehicleRecord> {
        let mut records: Vec<&VehicleRecord> = self.records.iter().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }
}

/// Totals over every registered day, regardless of active filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GlobalStats {
    pub vehicles: usize,
    pub invoices: u64,
}

impl GlobalStats {
    pub fn from_days(days: &[DayRecord]) -> Self {
        days.iter().fold(GlobalStats::default(), |mut acc, day| {
            acc.vehicles += day.vehicle_count();
            acc.invoices += day.invoice_count();
            acc
        })
    }
}

/// Vehicle input as typed by the operator, validated by [`NewVehicle::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub plate: String,
    pub driver: String,
    pub invoice_count: u32,
}

impl NewVehicle {
    /// Validates raw form input.
    ///
    /// The plate goes through [`mask_plate`] first, so `abc1234` and
    /// `ABC-1234` are equivalent.
    pub fn parse(plate: &str, driver: &str, invoices: &str) -> Result<Self, ValidationError> {
        let plate = mask_plate(plate);
        if plate.is_empty() {
            return Err(ValidationError::MissingField("plate"));
        }
        if driver.trim().is_empty() {
            return Err(ValidationError::MissingField("driver"));
        }
        if invoices.trim().is_empty() {
            return Err(ValidationError::MissingField("invoices"));
        }
        check_plate(&plate)?;

        let invoice_count = invoices
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidInvoiceCount(invoices.trim().to_string()))?;

        Ok(NewVehicle {
            plate,
            driver: driver.to_string(),
            invoice_count,
        })
    }
}

/// Normalizes free-form plate input into the `AAA-9999` shape.
///
/// Uppercases, drops everything but ASCII letters and digits, keeps at most
/// seven characters and inserts the separator after the third one. The
/// result may still be incomplete; see [`check_plate`].
pub fn mask_plate(input: &str) -> String {
    let chars: String = input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(PLATE_CHARS)
        .collect();

    if chars.len() > 3 {
        format!("{}-{}", &chars[..3], &chars[3..])
    } else {
        chars
    }
}

pub fn check_plate(masked: &str) -> Result<(), ValidationError> {
    if masked.len() < PLATE_LEN {
        return Err(ValidationError::IncompletePlate(masked.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_inserts_separator_after_third_char() {
        assert_eq!(mask_plate("abc1234"), "ABC-1234");
        assert_eq!(mask_plate("ab"), "AB");
        assert_eq!(mask_plate("abc"), "ABC");
        assert_eq!(mask_plate("abc1"), "ABC-1");
    }

    #[test]
    fn mask_strips_symbols_and_truncates() {
        assert_eq!(mask_plate("a.b c-1 2 3 4 5 6"), "ABC-1234");
        assert_eq!(mask_plate("ABC-1D23"), "ABC-1D23");
    }

    #[test]
    fn parse_rejects_incomplete_plate() {
        let err = NewVehicle::parse("ABC-12", "John", "3").unwrap_err();
        assert_eq!(err, ValidationError::IncompletePlate("ABC-12".to_string()));
    }

    #[test]
    fn parse_rejects_bad_invoice_count() {
        assert_eq!(
            NewVehicle::parse("ABC1234", "John", "-1").unwrap_err(),
            ValidationError::InvalidInvoiceCount("-1".to_string())
        );
        assert_eq!(
            NewVehicle::parse("ABC1234", "John", "five").unwrap_err(),
            ValidationError::InvalidInvoiceCount("five".to_string())
        );
    }

    #[test]
    fn parse_requires_driver() {
        assert_eq!(NewVehicle::parse("ABC1234", "  ", "3").unwrap_err(), ValidationError::MissingField("driver"));
    }

    #[test]
    fn parse_accepts_complete_input() {
        let vehicle = NewVehicle::parse("abc1234", "John", " 5 ").unwrap();
        assert_eq!(vehicle.plate, "ABC-1234");
        assert_eq!(vehicle.invoice_count, 5);
    }
}
