//! In-memory state of the conference tracker, persisted through a
//! [`KeyValueStore`].
//!
//! Each collection is loaded once when the store is opened and written back
//! in full after every mutation. Each mutation builds the new collection
//! first and swaps it in only once it has been written, so rejected input
//! and failed writes leave memory and storage as they were.

use super::store::KeyValueStore;
use crate::libs::backup::{Backup, RestoredState};
use crate::libs::config::StorageConfig;
use crate::libs::error::StoreError;
use crate::libs::manual::{ManualEntry, NewManualEntry};
use crate::libs::messages::Message;
use crate::libs::profile::{photo_data_url, UserProfile};
use crate::libs::record::{DayRecord, GlobalStats, NewVehicle, VehicleRecord};
use crate::msg_warning;
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

pub struct RecordStore<S: KeyValueStore> {
    store: S,
    keys: StorageConfig,
    days: Vec<DayRecord>,
    manual_entries: Vec<ManualEntry>,
    profile: UserProfile,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Loads every collection from `store`.
    ///
    /// Missing keys yield empty collections and the default profile. A blob
    /// that no longer parses is reported and treated as missing.
    pub fn load(store: S, keys: StorageConfig) -> Result<Self, StoreError> {
        let days = load_blob(&store, &keys.days_key)?.unwrap_or_default();
        let manual_entries = load_blob(&store, &keys.manual_key)?.unwrap_or_default();
        let profile = load_blob(&store, &keys.profile_key)?.unwrap_or_default();

        Ok(Self {
            store,
            keys,
            days,
            manual_entries,
            profile,
        })
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn manual_entries(&self) -> &[ManualEntry] {
        &self.manual_entries
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn global_stats(&self) -> GlobalStats {
        GlobalStats::from_days(&self.days)
    }

    /// Registers an empty day, keeping days sorted newest first.
    pub fn add_day(&mut self, date: NaiveDate) -> Result<&DayRecord, StoreError> {
        if self.day(date).is_some() {
            return Err(StoreError::DuplicateDay(date));
        }

        let position = self.days.iter().position(|d| d.date < date).unwrap_or(self.days.len());
        let mut days = self.days.clone();
        days.insert(position, DayRecord::new(date));
        self.commit_days(days)?;

        Ok(&self.days[position])
    }

    pub fn delete_day(&mut self, date: NaiveDate) -> Result<DayRecord, StoreError> {
        let position = self.day_position(date)?;
        let mut days = self.days.clone();
        let removed = days.remove(position);
        self.commit_days(days)?;
        Ok(removed)
    }

    /// Appends a vehicle to an existing day, stamped with the current time.
    pub fn add_vehicle(&mut self, date: NaiveDate, vehicle: NewVehicle) -> Result<VehicleRecord, StoreError> {
        let position = self.day_position(date)?;
        let record = VehicleRecord {
            id: Uuid::new_v4().to_string(),
            plate: vehicle.plate,
            driver: vehicle.driver,
            invoice_count: vehicle.invoice_count,
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut days = self.days.clone();
        days[position].records.push(record.clone());
        self.commit_days(days)?;
        Ok(record)
    }

    pub fn remove_vehicle(&mut self, date: NaiveDate, id: &str) -> Result<VehicleRecord, StoreError> {
        let position = self.day_position(date)?;
        let index = self.days[position]
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;

        let mut days = self.days.clone();
        let removed = days[position].records.remove(index);
        self.commit_days(days)?;
        Ok(removed)
    }

    /// Records a manual-index occurrence ahead of the existing ones.
    pub fn add_manual_entry(&mut self, date: NaiveDate, input: NewManualEntry) -> Result<ManualEntry, StoreError> {
        let entry = ManualEntry::new(Uuid::new_v4().to_string(), date, Utc::now().timestamp_millis(), input);
        let mut entries = Vec::with_capacity(self.manual_entries.len() + 1);
        entries.push(entry.clone());
        entries.extend(self.manual_entries.iter().cloned());
        self.commit_manual_entries(entries)?;
        Ok(entry)
    }

    pub fn remove_manual_entry(&mut self, id: &str) -> Result<ManualEntry, StoreError> {
        let index = self
            .manual_entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;

        let mut entries = self.manual_entries.clone();
        let removed = entries.remove(index);
        self.commit_manual_entries(entries)?;
        Ok(removed)
    }

    /// Updates the profile fields that are `Some`.
    pub fn update_profile(&mut self, name: Option<String>, email: Option<String>) -> Result<&UserProfile, StoreError> {
        let mut profile = self.profile.clone();
        if let Some(name) = name {
            profile.name = name;
        }
        if let Some(email) = email {
            profile.email = email;
        }
        self.commit_profile(profile)?;
        Ok(&self.profile)
    }

    pub fn change_password(&mut self, default_password: &str, current: &str, new: &str, confirm: &str) -> Result<(), StoreError> {
        let mut profile = self.profile.clone();
        profile.change_password(default_password, current, new, confirm)?;
        self.commit_profile(profile)
    }

    /// Reads an image file and stores it as the profile photo.
    pub async fn set_photo(&mut self, path: &Path) -> Result<(), StoreError> {
        let bytes = tokio::fs::read(path).await?;
        let mut profile = self.profile.clone();
        profile.photo = Some(photo_data_url(path, &bytes));
        self.commit_profile(profile)
    }

    pub fn backup(&self) -> Backup<'_> {
        Backup {
            days: &self.days,
            manual_entries: &self.manual_entries,
            profile: &self.profile,
        }
    }

    /// Replaces every collection with the restored state.
    ///
    /// The three collections are written in one batch; on failure neither
    /// storage nor memory changes. The profile is kept when the backup
    /// carries none.
    pub fn restore(&mut self, state: RestoredState) -> Result<(), StoreError> {
        let profile = state.profile.unwrap_or_else(|| self.profile.clone());

        let days = serde_json::to_string(&state.days)?;
        let manual_entries = serde_json::to_string(&state.manual_entries)?;
        let encoded_profile = serde_json::to_string(&profile)?;

        self.store.set_many(&[
            (self.keys.days_key.as_str(), days.as_str()),
            (self.keys.manual_key.as_str(), manual_entries.as_str()),
            (self.keys.profile_key.as_str(), encoded_profile.as_str()),
        ])?;

        self.days = state.days;
        self.manual_entries = state.manual_entries;
        self.profile = profile;
        Ok(())
    }

    /// E-mail of the logged-in user, if any.
    pub fn session(&self) -> Result<Option<String>, StoreError> {
        Ok(self.store.get(&self.keys.session_key)?.filter(|s| !s.is_empty()))
    }

    /// Opens a session for `email` and mirrors it into the profile.
    pub fn login(&mut self, email: &str) -> Result<(), StoreError> {
        let mut profile = self.profile.clone();
        profile.email = email.to_string();
        let encoded_profile = serde_json::to_string(&profile)?;

        self.store.set_many(&[
            (self.keys.session_key.as_str(), email),
            (self.keys.profile_key.as_str(), encoded_profile.as_str()),
        ])?;
        self.profile = profile;
        Ok(())
    }

    /// Ends the session. Returns `false` when there was none.
    pub fn logout(&mut self) -> Result<bool, StoreError> {
        let active = self.session()?.is_some();
        self.store.remove(&self.keys.session_key)?;
        Ok(active)
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn day_position(&self, date: NaiveDate) -> Result<usize, StoreError> {
        self.days.iter().position(|d| d.date == date).ok_or(StoreError::DayNotFound(date))
    }

    fn commit_days(&mut self, days: Vec<DayRecord>) -> Result<(), StoreError> {
        save_blob(&mut self.store, &self.keys.days_key, &days)?;
        self.days = days;
        Ok(())
    }

    fn commit_manual_entries(&mut self, entries: Vec<ManualEntry>) -> Result<(), StoreError> {
        save_blob(&mut self.store, &self.keys.manual_key, &entries)?;
        self.manual_entries = entries;
        Ok(())
    }

    fn commit_profile(&mut self, profile: UserProfile) -> Result<(), StoreError> {
        save_blob(&mut self.store, &self.keys.profile_key, &profile)?;
        self.profile = profile;
        Ok(())
    }
}

fn load_blob<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable stored data");
            msg_warning!(Message::StoredDataUnreadable(key.to_string(), err.to_string()));
            Ok(None)
        }
    }
}

fn save_blob<S: KeyValueStore, T: Serialize + ?Sized>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::libs::manual::{DriverType, ManualReason};

    /// Memory store whose writes can be switched off.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: bool,
    }

    impl FlakyStore {
        fn check(&self) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.check()?;
            self.inner.set(key, value)
        }

        fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
            self.check()?;
            self.inner.set_many(entries)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.check()?;
            self.inner.remove(key)
        }
    }

    fn flaky_store() -> RecordStore<FlakyStore> {
        let mut store = RecordStore::load(FlakyStore::default(), StorageConfig::default()).unwrap();
        store.add_day(date(10)).unwrap();
        store.store.fail_writes = true;
        store
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn store() -> RecordStore<MemoryStore> {
        RecordStore::load(MemoryStore::new(), StorageConfig::default()).unwrap()
    }

    #[test]
    fn days_are_kept_newest_first() {
        let mut store = store();
        store.add_day(date(10)).unwrap();
        store.add_day(date(12)).unwrap();
        store.add_day(date(11)).unwrap();
        let dates: Vec<_> = store.days().iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(12), date(11), date(10)]);
    }

    #[test]
    fn duplicate_day_is_rejected() {
        let mut store = store();
        store.add_day(date(10)).unwrap();
        assert!(matches!(store.add_day(date(10)), Err(StoreError::DuplicateDay(d)) if d == date(10)));
        assert_eq!(store.days().len(), 1);
    }

    #[test]
    fn vehicle_requires_registered_day() {
        let mut store = store();
        let vehicle = NewVehicle::parse("ABC1234", "John", "5").unwrap();
        assert!(matches!(store.add_vehicle(date(10), vehicle), Err(StoreError::DayNotFound(_))));
    }

    #[test]
    fn unreadable_blob_is_treated_as_empty() {
        let mut kv = MemoryStore::new();
        kv.set("romaneios_data_v1", "{broken").unwrap();
        let store = RecordStore::load(kv, StorageConfig::default()).unwrap();
        assert!(store.days().is_empty());
    }

    #[test]
    fn failed_vehicle_write_keeps_memory() {
        let mut store = flaky_store();
        let vehicle = NewVehicle::parse("ABC1234", "John", "5").unwrap();

        assert!(matches!(store.add_vehicle(date(10), vehicle), Err(StoreError::Io(_))));
        assert!(store.day(date(10)).unwrap().records.is_empty());
        assert!(matches!(store.add_day(date(11)), Err(StoreError::Io(_))));
        assert_eq!(store.days().len(), 1);
    }

    #[test]
    fn failed_manual_write_keeps_memory() {
        let mut store = flaky_store();
        let input = NewManualEntry::parse("Ana", "ABC1234", DriverType::Telog, 2, 1, ManualReason::Other).unwrap();

        assert!(store.add_manual_entry(date(10), input).is_err());
        assert!(store.manual_entries().is_empty());
        assert!(store.update_profile(Some("Ana".into()), None).is_err());
        assert_eq!(store.profile().name, UserProfile::default().name);
    }

    #[test]
    fn failed_restore_keeps_memory_and_storage() {
        let mut store = flaky_store();
        let state = RestoredState {
            days: vec![DayRecord::new(date(20))],
            manual_entries: Vec::new(),
            profile: None,
        };

        assert!(store.restore(state).is_err());
        assert_eq!(store.days()[0].date, date(10));

        let reloaded = RecordStore::load(store.into_inner(), StorageConfig::default()).unwrap();
        assert_eq!(reloaded.days()[0].date, date(10));
    }
}
