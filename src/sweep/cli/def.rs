use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Structure of the main command (sweep).
#[allow(unused)]
#[derive(Parser, Debug)]
#[command(
    about = "Sweep, a batch launcher for experiment sweeps",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The main command issued.
    #[command(subcommand)]
    pub command: SweepCommand,

    /// Disable interactive mode, for use in scripts.
    #[arg(short, long, global = true)]
    pub script: bool,

    /// The path to the config file.
    #[arg(short, long, default_value = "./sweep.toml", global = true)]
    pub config: PathBuf,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dry run, plan the jobs but don't actually launch anything.
    #[arg(short, long, global = true)]
    pub dry: bool,
}

/// Arguments supplied with the `launch` command.
#[derive(Args, Debug, Clone)]
pub struct LaunchStruct {
    /// The datasets to launch jobs for
    /// [default: the configured dataset list].
    #[arg(value_name = "DATASET")]
    pub datasets: Vec<String>,

    /// Override the configured free-text tag for this launch.
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Override the date tag [default: today as MMDD].
    #[arg(short = 'D', long)]
    pub date_tag: Option<String>,

    /// Override the GPU label embedded in log file names.
    #[arg(short, long)]
    pub gpu: Option<String>,
}

/// Arguments supplied with the `init` command.
#[derive(Args, Debug, Clone)]
pub struct InitStruct {
    /// The directory in which to write the template sweep.toml
    /// [default: the current directory].
    #[arg()]
    pub directory: Option<PathBuf>,
}

/// Enum for root-level `sweep` commands.
#[derive(Subcommand, Debug)]
pub enum SweepCommand {
    /// Launch one detached driver process per dataset.
    #[command()]
    Launch(LaunchStruct),

    /// Set up a template of a sweep configuration.
    #[command()]
    Init(InitStruct),

    /// Print information about the version.
    #[command()]
    Version,
}
