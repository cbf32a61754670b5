use super::common::{open_session, FilterArgs};
use crate::{
    libs::{
        aggregate::{aggregate, ChartPeriod},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Args)]
pub struct ChartArgs {
    #[arg(short, long, value_enum, default_value = "daily")]
    period: ChartPeriod,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ChartArgs) -> Result<()> {
    let (_, store) = open_session()?;

    let days = args.filter.to_filter().apply(store.days());
    let buckets = aggregate(&days, args.period);
    if buckets.is_empty() {
        msg_info!(Message::NoChartData);
        return Ok(());
    }

    let period = args
        .period
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default();
    msg_print!(Message::ChartHeader(period), true);
    View::chart(&buckets)?;
    Ok(())
}
