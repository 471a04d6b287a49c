use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reelmatch",
    version,
    about = "Match film/TV contacts and projects by shared mediums, genres, budgets and tags"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank projects for a contact, or contacts for a project
    Match(MatchCommand),
    /// Report data problems that degrade matching
    Check(CheckCommand),
}

#[derive(Args)]
pub struct MatchCommand {
    /// Workspace snapshot (JSON)
    pub snapshot: PathBuf,

    /// Suggest projects for this contact id
    #[arg(long, required_unless_present = "project", conflicts_with = "project")]
    pub contact: Option<String>,

    /// Suggest contacts for this project id
    #[arg(long, required_unless_present = "contact", conflicts_with = "contact")]
    pub project: Option<String>,

    /// Override the configured result cap
    #[arg(long)]
    pub cap: Option<usize>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Write the matches as a talking-point link plan
    #[arg(long)]
    pub export_links: bool,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Workspace snapshot (JSON)
    pub snapshot: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
