use super::common::{confirm, open_session, parse_date};
use crate::{
    libs::{
        error::{ExportError, StoreError},
        export::{ExportFormat, Exporter},
        formatter::format_minutes,
        kpi::ManualKpis,
        manual::{DriverType, ManualReason, NewManualEntry},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ManualArgs {
    #[command(subcommand)]
    command: Option<ManualCommand>,
}

#[derive(Debug, Subcommand)]
enum ManualCommand {
    /// Record invoices that had to be keyed in by hand
    Add {
        #[arg(short, long, default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
        #[arg(long)]
        driver: String,
        #[arg(short, long)]
        plate: String,
        #[arg(long, value_enum)]
        driver_type: DriverType,
        /// Invoices in the delivery
        #[arg(short, long)]
        total: u32,
        /// Invoices that could not be scanned
        #[arg(short, long)]
        unscanned: u32,
        #[arg(short, long, value_enum)]
        reason: ManualReason,
    },
    /// List occurrences and indicators
    List,
    /// Remove an occurrence
    Remove {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Export the manual index report
    Export {
        #[arg(short, long, value_enum, default_value = "pdf")]
        format: ExportFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn cmd(args: ManualArgs) -> Result<()> {
    match args.command {
        Some(ManualCommand::Add {
            date,
            driver,
            plate,
            driver_type,
            total,
            unscanned,
            reason,
        }) => {
            let input = match NewManualEntry::parse(&driver, &plate, driver_type, total, unscanned, reason) {
                Ok(input) => input,
                Err(err) => msg_bail_anyhow!(Message::ValidationFailed(err.to_string())),
            };
            handle_add(date, input)
        }
        Some(ManualCommand::List) | None => handle_list(),
        Some(ManualCommand::Remove { id, yes }) => handle_remove(id, yes),
        Some(ManualCommand::Export { format, output }) => handle_export(format, output),
    }
}

fn handle_add(date: NaiveDate, input: NewManualEntry) -> Result<()> {
    let (_, mut store) = open_session()?;

    let entry = store.add_manual_entry(date, input)?;
    msg_success!(Message::ManualEntryAdded(
        entry.plate.clone(),
        format_minutes(u64::from(entry.rework_time_minutes()))
    ));
    Ok(())
}

fn handle_list() -> Result<()> {
    let (_, store) = open_session()?;
    let entries = store.manual_entries();

    msg_print!(Message::ManualKpisHeader, true);
    View::kpis(&ManualKpis::compute(entries))?;

    if entries.is_empty() {
        msg_info!(Message::NoManualEntries);
        return Ok(());
    }

    msg_print!(Message::ManualEntriesHeader, true);
    View::manual_entries(entries)?;
    Ok(())
}

fn handle_remove(id: String, yes: bool) -> Result<()> {
    let (_, mut store) = open_session()?;

    let Some(entry) = store.manual_entries().iter().find(|e| e.id == id) else {
        msg_error!(Message::RecordNotFound(id));
        return Ok(());
    };

    if !confirm(Message::ConfirmRemoveManualEntry(entry.driver.clone(), entry.plate.clone()), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match store.remove_manual_entry(&id) {
        Ok(removed) => msg_success!(Message::ManualEntryRemoved(removed.id)),
        Err(StoreError::RecordNotFound(id)) => msg_error!(Message::RecordNotFound(id)),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_export(format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let (_, store) = open_session()?;

    match Exporter::new(format, output).export_manual(store.manual_entries()) {
        Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
        Err(ExportError::NothingToExport) => msg_bail_anyhow!(Message::NothingToExport),
        Err(err) => msg_bail_anyhow!(Message::ExportFailed(err.to_string())),
    }
    Ok(())
}
