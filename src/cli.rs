use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mortality-risk",
    version,
    about = "Rule-based COVID-19 mortality risk assessment CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors; reports are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one patient record
    Assess(AssessCommand),
    /// Score every .toml/.json patient file under a directory
    Batch(BatchCommand),
    /// Print the effective intake defaults
    Defaults,
    /// List the symptom checklist
    Symptoms,
}

#[derive(Args)]
pub struct AssessCommand {
    /// Patient file (.toml or .json); intake defaults are used when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Pass values through without clamping them to intake ranges
    #[arg(long)]
    pub no_clamp: bool,
    /// Also write the assessment as JSON into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub no_clamp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
