use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;
use log::warn;
use sweep_lib::bailc;
use sweep_lib::config::Config;
use sweep_lib::constants::CMD_STYLE;
use sweep_lib::file_system::FileOperations;

use crate::cli::printing::query_yes_no;

/// The name of the configuration file every sweep command looks for.
const CONFIG_FILE_NAME: &str = "sweep.toml";

/// The template configuration written by `sweep init`.
const CONFIG_TEMPLATE: &str = r#"# The model configuration handed through to the experiment driver.
config_file = "config_GIN.yml"

# A free-text label distinguishing this sweep from others.
tag = "run1"

# The datasets to launch one job for, in order. Can also be given on
# the command line: sweep launch NCI1 PROTEINS
datasets = ["NCI1", "ENZYMES", "PROTEINS", "IMDB-BINARY"]

# The date tag embedded in derived paths, today's date (MMDD) if unset.
# date_tag = "0101"

# The GPU label embedded in log file names.
# gpu = "0"

# The command that starts the driver, and arguments placed before the
# generated ones (useful when the driver is an interpreter).
# driver = "python3"
# driver_arguments = ["Launch_Experiments.py"]

# Arguments appended after the generated ones.
# extra_arguments = []

# Where result folders and log files are derived under.
# results_folder = "results"
# logs_folder = "logs"

# Whether to pass --debug to the driver.
# debug = true
"#;

/// Initializes a sweep setup.
///
/// This writes the template configuration into `directory`, creating it
/// if needed. An existing configuration is only overwritten after the
/// user confirms; in `script_mode` it is an error instead.
pub fn init_sweep_setup(
    directory: &Path,
    script_mode: bool,
    fs: &impl FileOperations,
) -> Result<()> {
    let config_path = directory.join(CONFIG_FILE_NAME);

    debug!("Checking for an existing configuration at {config_path:?}");

    if config_path.exists() {
        if script_mode {
            bailc!(
                "The configuration exists.", ;
                "A {CONFIG_FILE_NAME} already exists at {config_path:?}.", ;
                "Remove it first, or run without --script to be asked about overwriting.",
            );
        }

        if !query_yes_no(&format!("Overwrite the existing {config_path:?}?"))? {
            info!("Nothing was written");
            return Ok(());
        }
    }

    fs.write_utf8_truncate(&config_path, CONFIG_TEMPLATE)?;

    // Skipped on a dry run, where nothing was written.
    if config_path.exists() {
        match Config::from_file(&config_path, fs) {
            Err(e) => {
                debug!("Template check failed: {}", e.root_cause());
                warn!("The generated {CONFIG_FILE_NAME} did not parse back, this is a bug");
            }
            Ok(_) => debug!("The generated template parses"),
        }
    }

    info!("A template configuration is ready at {config_path:?}");
    info!("Edit it, then launch the sweep with:");
    info!(" >  {CMD_STYLE}sweep launch{CMD_STYLE:#}");

    Ok(())
}

#[cfg(test)]
#[path = "tests/init.rs"]
mod tests;
