use super::common::{confirm, open_session, parse_date, FilterArgs};
use crate::{
    libs::{
        error::StoreError,
        export::day_html,
        formatter::{format_date, weekday_name},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::{fs, path::PathBuf};

#[derive(Debug, Args)]
pub struct DayArgs {
    #[command(subcommand)]
    command: DayCommand,
}

#[derive(Debug, Subcommand)]
enum DayCommand {
    /// Register a new conference day
    Add {
        #[arg(default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
    },
    /// List registered days
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the vehicles of one day
    Show {
        #[arg(default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Delete a day and all its vehicles
    Delete {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the printable report of one day
    Print {
        #[arg(default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn cmd(args: DayArgs) -> Result<()> {
    match args.command {
        DayCommand::Add { date } => handle_add(date),
        DayCommand::List { filter } => handle_list(filter),
        DayCommand::Show { date } => handle_show(date),
        DayCommand::Delete { date, yes } => handle_delete(date, yes),
        DayCommand::Print { date, output } => handle_print(date, output),
    }
}

fn handle_add(date: NaiveDate) -> Result<()> {
    let (_, mut store) = open_session()?;

    match store.add_day(date) {
        Ok(_) => msg_success!(Message::DayAdded(format_date(date))),
        Err(StoreError::DuplicateDay(_)) => msg_error!(Message::DayAlreadyExists(format_date(date))),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_list(filter: FilterArgs) -> Result<()> {
    let (_, store) = open_session()?;

    if store.days().is_empty() {
        msg_info!(Message::NoDaysFound);
        return Ok(());
    }

    let days = filter.to_filter().apply(store.days());
    if days.is_empty() {
        msg_info!(Message::NoDaysMatchFilter);
        return Ok(());
    }

    msg_print!(Message::DaysHeader, true);
    View::days(&days)?;
    Ok(())
}

fn handle_show(date: NaiveDate) -> Result<()> {
    let (_, store) = open_session()?;

    let Some(day) = store.day(date) else {
        msg_error!(Message::DayNotFound(format_date(date)));
        return Ok(());
    };

    msg_print!(Message::DayHeader(weekday_name(date).to_string(), format_date(date)), true);
    if day.records.is_empty() {
        msg_info!(Message::DayIsEmpty(format_date(date)));
        return Ok(());
    }
    View::records(day)?;
    Ok(())
}

fn handle_delete(date: NaiveDate, yes: bool) -> Result<()> {
    let (_, mut store) = open_session()?;

    let Some(day) = store.day(date) else {
        msg_error!(Message::DayNotFound(format_date(date)));
        return Ok(());
    };

    if !confirm(Message::ConfirmDeleteDay(format_date(date), day.vehicle_count()), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.delete_day(date)?;
    msg_success!(Message::DayDeleted(format_date(date)));
    Ok(())
}

fn handle_print(date: NaiveDate, output: Option<PathBuf>) -> Result<()> {
    let (_, store) = open_session()?;

    let Some(day) = store.day(date) else {
        msg_error!(Message::DayNotFound(format_date(date)));
        return Ok(());
    };

    let path = output.unwrap_or_else(|| PathBuf::from(format!("romaneio_{}.html", date.format("%Y-%m-%d"))));
    fs::write(&path, day_html(day, &store.profile().name))?;

    msg_success!(Message::PrintSaved(path.display().to_string()));
    Ok(())
}
