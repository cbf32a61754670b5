//! Core library modules for the logicheck application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, errors
//! - **Domain Model**: Vehicle records, days, manual-index entries, profile
//! - **Pipeline**: Filtering, period aggregation, manual-index indicators
//! - **Output**: Console tables, CSV/PDF/HTML/Excel reports, backups
//!
//! ## Usage
//!
//! ```rust
//! use logicheck::libs::filter::DayFilter;
//! use logicheck::libs::record::GlobalStats;
//!
//! let filtered = DayFilter::default().apply(&[]);
//! assert_eq!(GlobalStats::from_days(&filtered).vehicles, 0);
//! ```

pub mod aggregate;
pub mod auth;
pub mod backup;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod kpi;
pub mod manual;
pub mod messages;
pub mod profile;
pub mod record;
pub mod view;
