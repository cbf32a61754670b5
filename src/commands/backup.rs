use super::common::open_session;
use crate::{
    libs::{backup::Backup, messages::Message},
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::{fs, path::PathBuf};

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: BackupArgs) -> Result<()> {
    let (_, store) = open_session()?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(Backup::default_file_name(Local::now().date_naive())));
    fs::write(&path, store.backup().to_json()?)?;

    msg_success!(Message::BackupCreated(path.display().to_string()));
    Ok(())
}
