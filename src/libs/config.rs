//! Configuration management for the logicheck application.
//!
//! Holds everything that used to be a module-level constant in a conference
//! tracker: the storage keys under which each collection is persisted, the
//! database file name, and the account accepted by the login gate. The
//! configuration is read once at startup and handed to the store and auth
//! collaborators explicitly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logicheck::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Days are stored under {}", config.storage.days_key);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Keys and file names used by the persistence layer.
///
/// Each collection lives under its own key as an opaque JSON blob, so
/// renaming a key effectively starts a fresh collection without touching
/// the others.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file, relative to the data directory.
    pub db_file: String,
    /// Key holding the day records.
    pub days_key: String,
    /// Key holding the manual-index entries.
    pub manual_key: String,
    /// Key holding the user profile.
    pub profile_key: String,
    /// Key holding the authenticated session marker.
    pub session_key: String,
}

/// Account accepted by the login gate.
///
/// This is a convenience gate for a shared workstation, not a security
/// boundary. The password stored in the profile takes precedence over
/// `default_password` once the user changes it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub default_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: "logicheck.db".to_string(),
            days_key: "romaneios_data_v1".to_string(),
            manual_key: "romaneios_manual_index_v1".to_string(),
            profile_key: "romaneios_user_profile_v1".to_string(),
            session_key: "romaneios_auth_session".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            email: "operador@logicheck.local".to_string(),
            default_password: "logicheck".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the platform data directory.
    ///
    /// A missing file yields the default configuration so the application
    /// works without any setup.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        Self::read_path(&config_file_path)
    }

    pub fn read_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleAuth);
        let auth = AuthConfig {
            email: Input::with_theme(&theme)
                .with_prompt(Message::PromptAccountEmail.to_string())
                .default(config.auth.email.clone())
                .interact_text()?,
            default_password: Input::with_theme(&theme)
                .with_prompt(Message::PromptDefaultPassword.to_string())
                .default(config.auth.default_password.clone())
                .interact_text()?,
        };

        msg_print!(Message::ConfigModuleStorage);
        let storage = StorageConfig {
            db_file: Input::with_theme(&theme)
                .with_prompt(Message::PromptDbFile.to_string())
                .default(config.storage.db_file.clone())
                .interact_text()?,
            days_key: Input::with_theme(&theme)
                .with_prompt(Message::PromptStorageKey("days".to_string()).to_string())
                .default(config.storage.days_key.clone())
                .interact_text()?,
            manual_key: Input::with_theme(&theme)
                .with_prompt(Message::PromptStorageKey("manual index".to_string()).to_string())
                .default(config.storage.manual_key.clone())
                .interact_text()?,
            profile_key: Input::with_theme(&theme)
                .with_prompt(Message::PromptStorageKey("profile".to_string()).to_string())
                .default(config.storage.profile_key.clone())
                .interact_text()?,
            session_key: Input::with_theme(&theme)
                .with_prompt(Message::PromptStorageKey("session".to_string()).to_string())
                .default(config.storage.session_key.clone())
                .interact_text()?,
        };

        Ok(Config { storage, auth })
    }
}
