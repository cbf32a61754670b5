use super::common::{open_session, FilterArgs};
use crate::{
    libs::{
        error::ExportError,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let (_, store) = open_session()?;

    let days = args.filter.to_filter().apply(store.days());
    let exporter = Exporter::new(args.format, args.output);

    match exporter.export_vehicles(&days, &store.profile().name) {
        Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
        Err(ExportError::NothingToExport) => msg_bail_anyhow!(Message::NothingToExport),
        Err(err) => msg_bail_anyhow!(Message::ExportFailed(err.to_string())),
    }
    Ok(())
}
