#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    LoginSuccess(String),
    AlreadyLoggedIn(String),
    InvalidCredentials,
    LoggedOut,
    NotLoggedIn,
    SessionRequired,

    // === DAY MESSAGES ===
    DayAdded(String),
    DayAlreadyExists(String),
    DayNotFound(String),
    DayDeleted(String),
    ConfirmDeleteDay(String, usize), // date, vehicle count
    NoDaysFound,
    NoDaysMatchFilter,
    DaysHeader,
    DayHeader(String, String), // weekday, date
    DayIsEmpty(String),
    PrintSaved(String),

    // === VEHICLE MESSAGES ===
    VehicleAdded(String, String), // plate, date
    VehicleRemoved(String),
    ConfirmRemoveVehicle(String, String), // plate, driver
    RecordNotFound(String),

    // === MANUAL INDEX MESSAGES ===
    ManualEntryAdded(String, String), // plate, rework time
    ManualEntryRemoved(String),
    ConfirmRemoveManualEntry(String, String), // driver, plate
    NoManualEntries,
    ManualEntriesHeader,
    ManualKpisHeader,

    // === CHART & SUMMARY MESSAGES ===
    ChartHeader(String),
    NoChartData,
    GlobalStatsHeader,
    FilteredStatsHeader,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NothingToExport,
    ExportFailed(String),

    // === BACKUP MESSAGES ===
    BackupCreated(String),
    ConfirmRestore(usize, usize), // days, manual entries
    RestoreCompleted,
    InvalidBackup(String),

    // === PROFILE MESSAGES ===
    ProfileHeader,
    ProfileUpdated,
    PhotoUpdated,
    PasswordChanged,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleAuth,
    ConfigModuleStorage,

    // === STORAGE MESSAGES ===
    StoredDataUnreadable(String, String), // key, error
    DatabaseOpened(String),

    // === VALIDATION MESSAGES ===
    ValidationFailed(String),

    // === PROMPTS ===
    PromptEmail,
    PromptPassword,
    PromptAccountEmail,
    PromptDefaultPassword,
    PromptDbFile,
    PromptStorageKey(String),
    PromptPlate,
    PromptDriver,
    PromptInvoices,
    PromptProfileName,
    PromptProfileEmail,
    PromptCurrentPassword,
    PromptNewPassword,
    PromptConfirmPassword,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
