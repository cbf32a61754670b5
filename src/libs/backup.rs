//! Full-state backup documents.
//!
//! A backup holds the three persisted collections in one pretty-printed JSON
//! document. Two shapes are accepted on restore: the current
//! `{days, manualEntries, profile}` object and the bare array of days written
//! by the first releases.

use super::error::BackupError;
use super::manual::ManualEntry;
use super::profile::UserProfile;
use super::record::DayRecord;
use chrono::NaiveDate;
use encoding_rs::UTF_8;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Backup<'a> {
    pub days: &'a [DayRecord],
    #[serde(rename = "manualEntries")]
    pub manual_entries: &'a [ManualEntry],
    pub profile: &'a UserProfile,
}

impl Backup<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn default_file_name(today: NaiveDate) -> String {
        format!("backup_logicheck_FULL_{}.json", today.format("%Y-%m-%d"))
    }
}

/// Decoded backup, ready to replace the stored state.
///
/// `profile` is `None` when the document carries none; the current profile
/// is kept in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredState {
    pub days: Vec<DayRecord>,
    pub manual_entries: Vec<ManualEntry>,
    pub profile: Option<UserProfile>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BackupPayload {
    Legacy(Vec<DayRecord>),
    Full(BackupDocument),
}

#[derive(Deserialize)]
struct BackupDocument {
    #[serde(default)]
    days: Vec<DayRecord>,
    #[serde(default, rename = "manualEntries")]
    manual_entries: Vec<ManualEntry>,
    #[serde(default)]
    profile: Option<UserProfile>,
}

/// Decodes a backup file, tolerating a leading UTF-8 BOM.
///
/// The decoded state must hold the same invariants as the live store: one
/// day per date and no manual entry with more unscanned than total
/// invoices. Days come back sorted newest first.
pub fn parse_backup(bytes: &[u8]) -> Result<RestoredState, BackupError> {
    let (text, _) = UTF_8.decode_with_bom_removal(bytes);
    if text.trim().is_empty() {
        return Err(BackupError::Empty);
    }

    // Decode through `Value` first so a malformed document reports the
    // JSON error instead of the untagged "did not match any variant".
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let payload: BackupPayload = serde_json::from_value(value)?;

    let mut state = match payload {
        BackupPayload::Legacy(days) => RestoredState {
            days,
            manual_entries: Vec::new(),
            profile: None,
        },
        BackupPayload::Full(doc) => RestoredState {
            days: doc.days,
            manual_entries: doc.manual_entries,
            profile: doc.profile,
        },
    };

    state.days.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(pair) = state.days.windows(2).find(|pair| pair[0].date == pair[1].date) {
        return Err(BackupError::DuplicateDay(pair[0].date));
    }
    if let Some(entry) = state.manual_entries.iter().find(|e| e.unscanned_nfs > e.total_nfs) {
        return Err(BackupError::UnscannedExceedsTotal {
            id: entry.id.clone(),
            unscanned: entry.unscanned_nfs,
            total: entry.total_nfs,
        });
    }

    Ok(state)
}
