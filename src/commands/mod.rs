pub mod backup;
pub mod chart;
pub mod common;
pub mod day;
pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod manual;
pub mod profile;
pub mod restore;
pub mod sum;
pub mod vehicle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Open a session")]
    Login(login::LoginArgs),
    #[command(about = "Close the current session")]
    Logout,
    #[command(about = "Manage conference days", arg_required_else_help = true)]
    Day(day::DayArgs),
    #[command(about = "Add or remove checked vehicles", arg_required_else_help = true)]
    Vehicle(vehicle::VehicleArgs),
    #[command(about = "Manual index occurrences")]
    Manual(manual::ManualArgs),
    #[command(about = "Vehicle and invoice volume per period")]
    Chart(chart::ChartArgs),
    #[command(about = "Get totals")]
    Sum(sum::SumArgs),
    #[command(about = "Export the conference report")]
    Export(export::ExportArgs),
    #[command(about = "Save a full backup of all data")]
    Backup(backup::BackupArgs),
    #[command(about = "Replace all data with a backup", arg_required_else_help = true)]
    Restore(restore::RestoreArgs),
    #[command(about = "Show or edit the user profile")]
    Profile(profile::ProfileArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Day(args) => day::cmd(args),
            Commands::Vehicle(args) => vehicle::cmd(args),
            Commands::Manual(args) => manual::cmd(args),
            Commands::Chart(args) => chart::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Backup(args) => backup::cmd(args),
            Commands::Restore(args) => restore::cmd(args).await,
            Commands::Profile(args) => profile::cmd(args).await,
        }
    }
}
