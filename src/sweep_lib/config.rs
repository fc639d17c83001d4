use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEBUG_DEFAULT;
use crate::constants::DRIVER_DEFAULT;
use crate::constants::EMPTY_ARGS;
use crate::constants::EMPTY_DATASETS;
use crate::constants::GPU_DEFAULT;
use crate::constants::LOGS_FOLDER_DEFAULT;
use crate::constants::PRIMARY_STYLE;
use crate::constants::RESULTS_FOLDER_DEFAULT;
use crate::error::ctx;
use crate::error::Ctx;
use crate::file_system::FileOperations;

/// A config struct used throughout the `sweep` application.
///
/// Every field has a single unambiguous value; one-shot overrides
/// happen on the command line, never by editing and re-editing this
/// file between launches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    //
    // Basic settings.
    //
    /// The model configuration file handed through to the driver.
    pub config_file: PathBuf,

    /// A free-text label distinguishing this sweep from others.
    pub tag: String,

    /// The datasets to launch one job for, in the order given.
    ///
    /// The names are not checked against any list of known datasets;
    /// whatever is written here reaches the driver verbatim.
    #[serde(default = "EMPTY_DATASETS")]
    pub datasets: Vec<String>,

    /// The date tag embedded in derived paths.
    ///
    /// # Default
    /// Today's date as MMDD.
    #[serde(default)]
    pub date_tag: Option<String>,

    /// The GPU label embedded in log file names.
    #[serde(default = "GPU_DEFAULT")]
    pub gpu: String,

    //
    // Advanced settings.
    //
    /// The command to execute to get to the driver.
    #[serde(default = "DRIVER_DEFAULT")]
    pub driver: String,

    /// Arguments placed before the generated ones, for example the
    /// script path when `driver` is an interpreter.
    #[serde(default = "EMPTY_ARGS")]
    pub driver_arguments: Vec<String>,

    /// Arguments appended after the generated ones.
    #[serde(default = "EMPTY_ARGS")]
    pub extra_arguments: Vec<String>,

    /// The folder under which per-job result folders are derived.
    #[serde(default = "RESULTS_FOLDER_DEFAULT")]
    pub results_folder: PathBuf,

    /// The folder under which per-job log files are derived.
    #[serde(default = "LOGS_FOLDER_DEFAULT")]
    pub logs_folder: PathBuf,

    /// Whether to pass `--debug` to the driver.
    #[serde(default = "DEBUG_DEFAULT")]
    pub debug: bool,
}

impl Config {
    /// Load a `Config` struct instance from a TOML file at the provided path.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<Config> {
        toml::from_str(&fs.read_utf8(path)?).with_context(ctx!(
          "Could not parse {path:?}", ;
          "Run {PRIMARY_STYLE}sweep init{PRIMARY_STYLE:#} to generate a valid starting point",
        ))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
