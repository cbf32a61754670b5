//! # LogiCheck - Delivery Conference Tracker
//!
//! A command-line utility for logging checked vehicles per day, recording
//! manual-index occurrences and producing conference reports.
//!
//! ## Features
//!
//! - **Daily Conference**: Register days and the vehicles checked on each
//! - **Manual Index**: Track invoices keyed in by hand and the rework they cost
//! - **Charts**: Daily, weekly and monthly volume rollups
//! - **Reports**: CSV, PDF, printable HTML and Excel exports
//! - **Backups**: Full-state JSON backup and restore
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logicheck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
