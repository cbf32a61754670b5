//! Display implementation for logicheck application messages.
//!
//! Every user-facing console text lives here, so commands only deal with
//! typed [`Message`] values. Report contents (CSV, PDF, HTML) are not
//! messages; they keep the Portuguese labels operators print and sign.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::LoginSuccess(email) => format!("Logged in as {}", email),
            Message::AlreadyLoggedIn(email) => format!("Already logged in as {}", email),
            Message::InvalidCredentials => "Invalid e-mail or password".to_string(),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "No active session".to_string(),
            Message::SessionRequired => "Login required. Run 'logicheck login' first".to_string(),

            // === DAY MESSAGES ===
            Message::DayAdded(date) => format!("Day {} registered", date),
            Message::DayAlreadyExists(date) => format!("Day {} is already registered", date),
            Message::DayNotFound(date) => format!("Day {} is not registered", date),
            Message::DayDeleted(date) => format!("Day {} deleted", date),
            Message::ConfirmDeleteDay(date, count) => {
                format!("Delete day {} and its {} vehicle record(s)?", date, count)
            }
            Message::NoDaysFound => "No days registered yet".to_string(),
            Message::NoDaysMatchFilter => "No days match the current filters".to_string(),
            Message::DaysHeader => "Registered days:".to_string(),
            Message::DayHeader(weekday, date) => format!("{} - {}", weekday, date),
            Message::DayIsEmpty(date) => format!("No vehicles registered on {}", date),
            Message::PrintSaved(path) => format!("Printable report saved to {}", path),

            // === VEHICLE MESSAGES ===
            Message::VehicleAdded(plate, date) => format!("Vehicle {} added to {}", plate, date),
            Message::VehicleRemoved(plate) => format!("Vehicle {} removed", plate),
            Message::ConfirmRemoveVehicle(plate, driver) => {
                format!("Remove vehicle {} ({})?", plate, driver)
            }
            Message::RecordNotFound(id) => format!("Record {} not found", id),

            // === MANUAL INDEX MESSAGES ===
            Message::ManualEntryAdded(plate, rework) => {
                format!("Manual occurrence for {} recorded ({} of rework)", plate, rework)
            }
            Message::ManualEntryRemoved(id) => format!("Manual occurrence {} removed", id),
            Message::ConfirmRemoveManualEntry(driver, plate) => {
                format!("Remove the manual occurrence of {} ({})?", driver, plate)
            }
            Message::NoManualEntries => "No manual occurrences recorded".to_string(),
            Message::ManualEntriesHeader => "Manual index occurrences:".to_string(),
            Message::ManualKpisHeader => "Manual index indicators:".to_string(),

            // === CHART & SUMMARY MESSAGES ===
            Message::ChartHeader(period) => format!("Conference volume ({})", period),
            Message::NoChartData => "No data for this period".to_string(),
            Message::GlobalStatsHeader => "Totals over all registered days:".to_string(),
            Message::FilteredStatsHeader => "Totals for the current filters:".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NothingToExport => "No data to export".to_string(),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === BACKUP MESSAGES ===
            Message::BackupCreated(path) => format!("Backup saved to {}", path),
            Message::ConfirmRestore(days, entries) => format!(
                "Replace ALL current data with the backup ({} day(s), {} manual occurrence(s))?",
                days, entries
            ),
            Message::RestoreCompleted => "Data restored successfully".to_string(),
            Message::InvalidBackup(error) => format!("Invalid backup file: {}", error),

            // === PROFILE MESSAGES ===
            Message::ProfileHeader => "Profile:".to_string(),
            Message::ProfileUpdated => "Profile updated".to_string(),
            Message::PhotoUpdated => "Profile photo updated".to_string(),
            Message::PasswordChanged => "Password changed".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleAuth => "Account settings".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),

            // === STORAGE MESSAGES ===
            Message::StoredDataUnreadable(key, error) => {
                format!("Stored data under '{}' is unreadable and was ignored: {}", key, error)
            }
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed(error) => format!("Invalid input: {}", error),

            // === PROMPTS ===
            Message::PromptEmail => "E-mail".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptAccountEmail => "Enter the account e-mail".to_string(),
            Message::PromptDefaultPassword => "Enter the default password".to_string(),
            Message::PromptDbFile => "Enter the database file name".to_string(),
            Message::PromptStorageKey(name) => format!("Enter the storage key for {}", name),
            Message::PromptPlate => "Plate".to_string(),
            Message::PromptDriver => "Driver".to_string(),
            Message::PromptInvoices => "Invoices".to_string(),
            Message::PromptProfileName => "Name".to_string(),
            Message::PromptProfileEmail => "E-mail".to_string(),
            Message::PromptCurrentPassword => "Current password".to_string(),
            Message::PromptNewPassword => "New password".to_string(),
            Message::PromptConfirmPassword => "Confirm new password".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
