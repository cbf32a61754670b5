use super::common::{confirm, open_session};
use crate::{
    libs::{backup::parse_backup, messages::Message},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Backup file produced by `logicheck backup`
    file: PathBuf,

    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: RestoreArgs) -> Result<()> {
    let (_, mut store) = open_session()?;

    let bytes = tokio::fs::read(&args.file).await?;
    let state = parse_backup(&bytes).map_err(|err| msg_error_anyhow!(Message::InvalidBackup(err.to_string())))?;

    if !confirm(Message::ConfirmRestore(state.days.len(), state.manual_entries.len()), args.yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.restore(state)?;
    msg_success!(Message::RestoreCompleted);
    Ok(())
}
