use std::env;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use chrono::Local;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use log::debug;
use log::info;
use log::trace;
use log::warn;
use log::LevelFilter;
use sweep_lib::batch::Batch;
use sweep_lib::config::Config;
use sweep_lib::constants::ERROR_STYLE;
use sweep_lib::constants::PRIMARY_STYLE;
use sweep_lib::ctx;
use sweep_lib::error::Ctx;
use sweep_lib::file_system::FileSystemInteractor;

use super::log::LogTokens;
use super::printing::format_table;
use super::printing::get_styles;
use super::printing::print_version;
use crate::cli::def::Cli;
use crate::cli::def::LaunchStruct;
use crate::cli::def::SweepCommand;
use crate::dispatch::launch_batch;
use crate::init::init_sweep_setup;

/// This function parses the command that sweep was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        eprintln!("{:?}", process_command(&command));
    } else if let Err(e) = process_command(&command) {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let file_system = FileSystemInteractor { dry_run: cmd.dry };

    match &cmd.command {
        SweepCommand::Launch(args) => {
            debug!("Reading the config: {:?}", cmd.config);

            let config = apply_overrides(Config::from_file(&cmd.config, &file_system)?, args);
            trace!("The effective config is: {config:#?}");

            let batch = Batch::from_config(&config, Local::now())?;

            if batch.jobs.is_empty() {
                warn!(
                    "Nothing to launch, add datasets to {PRIMARY_STYLE}sweep.toml\
                    {PRIMARY_STYLE:#} or pass them on the command line"
                );
                return Ok(());
            }

            debug!("Planned {} jobs at {}", batch.jobs.len(), batch.created);
            println!("{}", format_table(plan_rows(&batch)));

            if cmd.dry {
                info!("Would have launched {} jobs (dry)", batch.jobs.len());
                return Ok(());
            }

            let children = launch_batch(&batch, &file_system)?;

            for (job, child) in batch.jobs.iter().zip(&children) {
                info!(
                    "Started {} (pid {}), logging to {:?}",
                    job.dataset,
                    child.id(),
                    job.log_file
                );
            }

            // The handles are dropped here on purpose: the jobs keep
            // running on their own and sweep exits without waiting.
            info!(
                "Launched {} jobs, they run in the background until the driver finishes",
                children.len()
            );
        }

        SweepCommand::Init(args) => {
            let directory = args.directory.clone().unwrap_or_else(|| ".".into());
            init_sweep_setup(&directory, cmd.script, &file_system)?;
        }

        SweepCommand::Version => print_version(cmd.script),
    }

    Ok(())
}

/// Fold the one-shot command line overrides into the configuration.
fn apply_overrides(mut config: Config, args: &LaunchStruct) -> Config {
    if !args.datasets.is_empty() {
        config.datasets = args.datasets.clone();
    }

    if let Some(tag) = &args.tag {
        config.tag = tag.clone();
    }

    if let Some(date_tag) = &args.date_tag {
        config.date_tag = Some(date_tag.clone());
    }

    if let Some(gpu) = &args.gpu {
        config.gpu = gpu.clone();
    }

    config
}

/// The rows of the plan table printed before dispatch.
fn plan_rows(batch: &Batch) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "dataset".to_string(),
        "result folder".to_string(),
        "log file".to_string(),
    ]];

    for job in &batch.jobs {
        rows.push(vec![
            job.dataset.clone(),
            job.result_folder.display().to_string(),
            job.log_file.display().to_string(),
        ]);
    }

    rows
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the command line interface", ;
        "Make sure you are using a supported terminal",
    ))?;

    Ok(())
}
