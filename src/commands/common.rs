//! Helpers shared by the data commands.

use crate::{
    db::{db::Db, record_store::RecordStore},
    libs::{config::Config, data_storage::DataStorage, filter::DayFilter, messages::Message},
    msg_bail_anyhow,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Date-range and text filters accepted by the listing and export commands.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
    /// Driver or plate substring
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> DayFilter {
        DayFilter::new(self.from, self.to, self.search.clone())
    }
}

/// Parses `YYYY-MM-DD` or the word `today`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if value.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
    }
}

/// Loads the configuration and opens the record store it points to.
pub fn open_store() -> Result<(Config, RecordStore<Db>)> {
    let config = Config::read()?;
    let db = Db::new(&config.storage, &DataStorage::new())?;
    let store = RecordStore::load(db, config.storage.clone())?;
    Ok((config, store))
}

/// Like [`open_store`], but refuses to continue without an active session.
pub fn open_session() -> Result<(Config, RecordStore<Db>)> {
    let (config, store) = open_store()?;
    if store.session()?.is_none() {
        msg_bail_anyhow!(Message::SessionRequired);
    }
    Ok((config, store))
}

/// Asks for confirmation unless `assume_yes` is set.
pub fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_and_today() {
        assert_eq!(parse_date("2025-01-10").unwrap(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(parse_date("TODAY").unwrap(), Local::now().date_naive());
        assert!(parse_date("10/01/2025").is_err());
    }
}
