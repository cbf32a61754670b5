use super::common::{open_session, FilterArgs};
use crate::{
    libs::{messages::Message, record::GlobalStats, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let (_, store) = open_session()?;

    msg_print!(Message::GlobalStatsHeader, true);
    View::stats(&store.global_stats())?;

    let filter = args.filter.to_filter();
    if !filter.is_empty() {
        msg_print!(Message::FilteredStatsHeader, true);
        View::stats(&GlobalStats::from_days(&filter.apply(store.days())))?;
    }
    Ok(())
}
