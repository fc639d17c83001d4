use std::path::Path;
use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use chrono::DateTime;
use chrono::Local;

use crate::bailc;
use crate::config::Config;
use crate::constants::DATE_TAG_FORMAT;
use crate::constants::LOG_FILE_SUFFIX;
use crate::constants::RESULT_FOLDER_PREFIX;
use crate::error::ctx;
use crate::error::Ctx;

/// One planned invocation of the experiment driver.
///
/// A job is put together right before launch and never persisted; once
/// the process is running the only trace of the job is its log file.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    /// The dataset this job trains and evaluates on.
    pub dataset: String,

    /// The model configuration file handed to the driver.
    pub config_file: PathBuf,

    /// Where the driver is told to place its results.
    pub result_folder: PathBuf,

    /// Where the combined stdout and stderr of the driver end up.
    pub log_file: PathBuf,

    /// The generated argument list for the driver.
    pub arguments: Vec<String>,
}

/// An ordered set of jobs, ready to be dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// The time at which this batch was planned.
    pub created: DateTime<Local>,

    /// The command that starts the driver.
    pub driver: String,

    /// Arguments placed before each job's generated ones.
    pub driver_arguments: Vec<String>,

    /// The jobs, in the order the datasets were supplied.
    pub jobs: Vec<JobSpec>,
}

impl Batch {
    /// Plan a batch from the configuration: one job per dataset, in the
    /// order the datasets were given.
    ///
    /// The fields the launcher itself embeds into paths are validated
    /// here; dataset names are passed through as-is and any rejection
    /// happens inside the driver.
    pub fn from_config(conf: &Config, time: DateTime<Local>) -> Result<Self> {
        let date_tag = match &conf.date_tag {
            Some(dt) => dt.clone(),
            None => time.format(DATE_TAG_FORMAT).to_string(),
        };

        check_embedded_field(&conf.tag, "tag")?;
        check_embedded_field(&date_tag, "date_tag")?;
        check_embedded_field(&conf.gpu, "gpu")?;

        let mut jobs = Vec::with_capacity(conf.datasets.len());

        for dataset in &conf.datasets {
            jobs.push(JobSpec::derive(conf, dataset, &date_tag)?);
        }

        Ok(Self {
            created: time,
            driver: conf.driver.clone(),
            driver_arguments: conf.driver_arguments.clone(),
            jobs,
        })
    }
}

impl JobSpec {
    /// Derive the paths and argument list of one job.
    ///
    /// The dataset is embedded in the result folder and in the log file,
    /// so two jobs of the same batch can never share either path.
    fn derive(conf: &Config, dataset: &str, date_tag: &str) -> Result<Self> {
        let tag = &conf.tag;
        let gpu = &conf.gpu;

        let result_folder = conf
            .results_folder
            .join(format!("{RESULT_FOLDER_PREFIX}{date_tag}_{tag}_{dataset}"));

        let log_file = conf
            .logs_folder
            .join(format!("{gpu}_{date_tag}_{tag}_{dataset}{LOG_FILE_SUFFIX}"));

        let mut arguments = vec![
            "--config-file".to_string(),
            path_to_string(&conf.config_file)?,
            "--dataset-name".to_string(),
            dataset.to_string(),
            "--result-folder".to_string(),
            path_to_string(&result_folder)?,
        ];

        if conf.debug {
            arguments.push("--debug".to_string());
        }

        arguments.extend(conf.extra_arguments.iter().cloned());

        Ok(Self {
            dataset: dataset.to_string(),
            config_file: conf.config_file.clone(),
            result_folder,
            log_file,
            arguments,
        })
    }
}

/// Reject values that would mangle the derived paths.
fn check_embedded_field(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        bailc!(
            "The {field} is empty.", ;
            "The {field} is embedded in every derived path and cannot be empty.", ;
            "Set a value for it in sweep.toml or on the command line.",
        );
    }

    if value.contains(['/', '\\']) || value.contains(char::is_whitespace) {
        bailc!(
            "Invalid {field}: {value:?}.", ;
            "The {field} is embedded in every derived path and cannot \
            contain path separators or whitespace.", ;
            "Pick a plain label such as \"run1\".",
        );
    }

    Ok(())
}

/// Stringify a path for the driver's argument list.
fn path_to_string(path: &Path) -> Result<String> {
    Ok(path
        .to_str()
        .ok_or(anyhow!("The path {path:?} is not valid UTF-8"))
        .with_context(ctx!("",;"",))?
        .to_string())
}

#[cfg(test)]
#[path = "tests/batch.rs"]
mod tests;
