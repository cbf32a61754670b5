use super::common::{confirm, open_session, parse_date};
use crate::{
    libs::{error::StoreError, formatter::format_date, messages::Message, record::NewVehicle},
    msg_bail_anyhow, msg_error, msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct VehicleArgs {
    #[command(subcommand)]
    command: VehicleCommand,
}

#[derive(Debug, Subcommand)]
enum VehicleCommand {
    /// Add a checked vehicle to a day; missing fields are prompted
    Add {
        #[arg(short, long, default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
        #[arg(short, long)]
        plate: Option<String>,
        #[arg(long)]
        driver: Option<String>,
        #[arg(short, long)]
        invoices: Option<String>,
    },
    /// Remove a vehicle record from a day
    Remove {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: VehicleArgs) -> Result<()> {
    match args.command {
        VehicleCommand::Add {
            date,
            plate,
            driver,
            invoices,
        } => handle_add(date, plate, driver, invoices),
        VehicleCommand::Remove { date, id, yes } => handle_remove(date, id, yes),
    }
}

fn prompt_if_missing(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?),
    }
}

fn handle_add(date: NaiveDate, plate: Option<String>, driver: Option<String>, invoices: Option<String>) -> Result<()> {
    let (_, mut store) = open_session()?;

    if store.day(date).is_none() {
        msg_error!(Message::DayNotFound(format_date(date)));
        return Ok(());
    }

    let plate = prompt_if_missing(plate, Message::PromptPlate)?;
    let driver = prompt_if_missing(driver, Message::PromptDriver)?;
    let invoices = prompt_if_missing(invoices, Message::PromptInvoices)?;

    let vehicle = match NewVehicle::parse(&plate, &driver, &invoices) {
        Ok(vehicle) => vehicle,
        Err(err) => msg_bail_anyhow!(Message::ValidationFailed(err.to_string())),
    };

    let record = store.add_vehicle(date, vehicle)?;
    msg_success!(Message::VehicleAdded(record.plate, format_date(date)));
    Ok(())
}

fn handle_remove(date: NaiveDate, id: String, yes: bool) -> Result<()> {
    let (_, mut store) = open_session()?;

    let Some(record) = store.day(date).and_then(|d| d.records.iter().find(|r| r.id == id)) else {
        msg_error!(Message::RecordNotFound(id));
        return Ok(());
    };

    if !confirm(Message::ConfirmRemoveVehicle(record.plate.clone(), record.driver.clone()), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match store.remove_vehicle(date, &id) {
        Ok(removed) => msg_success!(Message::VehicleRemoved(removed.plate)),
        Err(StoreError::RecordNotFound(id)) => msg_error!(Message::RecordNotFound(id)),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
