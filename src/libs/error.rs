//! Typed errors raised by the record store and the report pipeline.
//!
//! Every variant is recoverable: the caller reports it and the stored state
//! stays exactly as it was before the failed operation.

use chrono::NaiveDate;
use thiserror::Error;

/// Rejected user input. Nothing is written when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),
    #[error("plate '{0}' is incomplete (expected format ABC-1234)")]
    IncompletePlate(String),
    #[error("invalid invoice quantity '{0}'")]
    InvalidInvoiceCount(String),
    #[error("unscanned invoices ({unscanned}) cannot exceed the total ({total})")]
    UnscannedExceedsTotal { unscanned: u32, total: u32 },
    #[error("the current password is incorrect")]
    WrongCurrentPassword,
    #[error("the new password must have at least {0} characters")]
    PasswordTooShort(usize),
    #[error("the new passwords do not match")]
    PasswordMismatch,
}

/// Errors raised by mutations of the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("day {0} is already registered")]
    DuplicateDay(NaiveDate),
    #[error("day {0} is not registered")]
    DayNotFound(NaiveDate),
    #[error("record {0} not found")]
    RecordNotFound(String),
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode stored data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised while decoding a backup document.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("invalid backup file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid backup file: empty document")]
    Empty,
    #[error("invalid backup file: day {0} appears more than once")]
    DuplicateDay(NaiveDate),
    #[error("invalid backup file: entry {id} has {unscanned} unscanned of {total} invoices")]
    UnscannedExceedsTotal { id: String, unscanned: u32, total: u32 },
}

/// Errors raised by the report exporters.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no data to export")]
    NothingToExport,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to build PDF: {0}")]
    Pdf(String),
    #[error(transparent)]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}
