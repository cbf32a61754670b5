//! Manual-index occurrences: deliveries whose invoices could not be scanned
//! and had to be keyed in by hand.

use super::error::ValidationError;
use super::record::{check_plate, mask_plate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes of rework charged for each invoice that was not scanned.
pub const REWORK_MINUTES_PER_INVOICE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum DriverType {
    #[serde(rename = "Motorista Telog")]
    #[value(name = "telog")]
    Telog,
    #[serde(rename = "Motorista Terceiro")]
    #[value(name = "third-party")]
    ThirdParty,
    #[serde(rename = "Provinda")]
    #[value(name = "provinda")]
    Provinda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ManualReason {
    #[serde(rename = "App inoperante")]
    #[value(name = "app-down")]
    AppDown,
    #[serde(rename = "Falha de sinal")]
    #[value(name = "signal-failure")]
    SignalFailure,
    #[serde(rename = "Não realizado")]
    #[value(name = "not-done")]
    NotDone,
    #[serde(rename = "Outros")]
    #[value(name = "other")]
    Other,
}

impl fmt::Display for DriverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DriverType::Telog => "Motorista Telog",
            DriverType::ThirdParty => "Motorista Terceiro",
            DriverType::Provinda => "Provinda",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ManualReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ManualReason::AppDown => "App inoperante",
            ManualReason::SignalFailure => "Falha de sinal",
            ManualReason::NotDone => "Não realizado",
            ManualReason::Other => "Outros",
        };
        f.write_str(label)
    }
}

/// A recorded manual-index occurrence.
///
/// `rework_time_minutes` is always `unscanned_nfs * 2`. It is stored for
/// compatibility with existing backups but recomputed on every load, so a
/// hand-edited value never survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredManualEntry")]
pub struct ManualEntry {
    pub id: String,
    pub date: NaiveDate,
    pub timestamp: i64,
    pub driver: String,
    pub plate: String,
    /// Absent only in entries written before the field existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_type: Option<DriverType>,
    pub total_nfs: u32,
    pub unscanned_nfs: u32,
    pub reason: ManualReason,
    rework_time_minutes: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredManualEntry {
    id: String,
    date: NaiveDate,
    timestamp: i64,
    driver: String,
    plate: String,
    #[serde(default)]
    driver_type: Option<DriverType>,
    total_nfs: u32,
    unscanned_nfs: u32,
    reason: ManualReason,
}

impl From<StoredManualEntry> for ManualEntry {
    fn from(stored: StoredManualEntry) -> Self {
        ManualEntry {
            rework_time_minutes: rework_minutes(stored.unscanned_nfs),
            id: stored.id,
            date: stored.date,
            timestamp: stored.timestamp,
            driver: stored.driver,
            plate: stored.plate,
            driver_type: stored.driver_type,
            total_nfs: stored.total_nfs,
            unscanned_nfs: stored.unscanned_nfs,
            reason: stored.reason,
        }
    }
}

impl ManualEntry {
    pub fn new(id: String, date: NaiveDate, timestamp: i64, input: NewManualEntry) -> Self {
        ManualEntry {
            id,
            date,
            timestamp,
            driver: input.driver,
            plate: input.plate,
            driver_type: Some(input.driver_type),
            total_nfs: input.total_nfs,
            unscanned_nfs: input.unscanned_nfs,
            reason: input.reason,
            rework_time_minutes: rework_minutes(input.unscanned_nfs),
        }
    }

    pub fn rework_time_minutes(&self) -> u32 {
        self.rework_time_minutes
    }

    /// Driver link label for reports, `-` for legacy entries without one.
    pub fn driver_type_label(&self) -> String {
        self.driver_type.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
    }

    /// `unscanned / total` as shown in the NFs column.
    pub fn nfs_label(&self) -> String {
        format!("{} / {}", self.unscanned_nfs, self.total_nfs)
    }
}

pub fn rework_minutes(unscanned_nfs: u32) -> u32 {
    unscanned_nfs.saturating_mul(REWORK_MINUTES_PER_INVOICE)
}

/// Validated manual-index form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewManualEntry {
    pub driver: String,
    pub plate: String,
    pub driver_type: DriverType,
    pub total_nfs: u32,
    pub unscanned_nfs: u32,
    pub reason: ManualReason,
}

impl NewManualEntry {
    pub fn parse(
        driver: &str,
        plate: &str,
        driver_type: DriverType,
        total_nfs: u32,
        unscanned_nfs: u32,
        reason: ManualReason,
    ) -> Result<Self, ValidationError> {
        if driver.trim().is_empty() {
            return Err(ValidationError::MissingField("driver"));
        }
        let plate = mask_plate(plate);
        if plate.is_empty() {
            return Err(ValidationError::MissingField("plate"));
        }
        check_plate(&plate)?;
        if unscanned_nfs > total_nfs {
            return Err(ValidationError::UnscannedExceedsTotal {
                unscanned: unscanned_nfs,
                total: total_nfs,
            });
        }

        Ok(NewManualEntry {
            driver: driver.to_string(),
            plate,
            driver_type,
            total_nfs,
            unscanned_nfs,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(total: u32, unscanned: u32) -> Result<NewManualEntry, ValidationError> {
        NewManualEntry::parse("Maria", "xyz9876", DriverType::ThirdParty, total, unscanned, ManualReason::SignalFailure)
    }

    #[test]
    fn rework_is_two_minutes_per_unscanned_invoice() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let entry = ManualEntry::new("1".into(), date, 0, input(10, 4).unwrap());
        assert_eq!(entry.rework_time_minutes(), 8);
        assert_eq!(entry.plate, "XYZ-9876");
    }

    #[test]
    fn unscanned_cannot_exceed_total() {
        assert_eq!(input(3, 4).unwrap_err(), ValidationError::UnscannedExceedsTotal { unscanned: 4, total: 3 });
        assert!(input(4, 4).is_ok());
    }

    #[test]
    fn stored_rework_value_is_recomputed() {
        let json = r#"{"id":"a","date":"2025-01-10","timestamp":1,"driver":"Ana","plate":"ABC-1234",
            "driverType":"Provinda","totalNfs":5,"unscannedNfs":3,"reason":"Outros","reworkTimeMinutes":99}"#;
        let entry: ManualEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.rework_time_minutes(), 6);
    }

    #[test]
    fn legacy_carrier_field_is_ignored() {
        let json = r#"{"id":"a","date":"2025-01-10","timestamp":1,"driver":"Ana","plate":"ABC-1234",
            "carrier":"Old Co","totalNfs":5,"unscannedNfs":1,"reason":"App inoperante","reworkTimeMinutes":2}"#;
        let entry: ManualEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.driver_type, None);
        assert_eq!(entry.driver_type_label(), "-");
        assert!(!serde_json::to_string(&entry).unwrap().contains("carrier"));
    }

    #[test]
    fn serializes_stored_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let entry = ManualEntry::new("1".into(), date, 0, input(2, 1).unwrap());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["driverType"], "Motorista Terceiro");
        assert_eq!(json["reason"], "Falha de sinal");
        assert_eq!(json["reworkTimeMinutes"], 2);
        assert_eq!(json["date"], "2025-01-10");
    }
}
