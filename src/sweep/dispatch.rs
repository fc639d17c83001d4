use std::fs::File;
use std::process::Child;
use std::process::Command;
use std::process::Stdio;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use sweep_lib::batch::Batch;
use sweep_lib::batch::JobSpec;
use sweep_lib::ctx;
use sweep_lib::error::Ctx;
use sweep_lib::file_system::FileOperations;

/// Dispatch every job in the batch as a detached background process.
///
/// The spawn handles are returned in job order; the caller is free to
/// drop them. Nothing waits on the children, they keep running after
/// this process exits.
pub fn launch_batch(batch: &Batch, fs: &impl FileOperations) -> Result<Vec<Child>> {
    let mut children = Vec::with_capacity(batch.jobs.len());

    for job in &batch.jobs {
        children.push(launch(batch, job, fs)?);
    }

    Ok(children)
}

/// Start a single driver process for `job`, with its combined stdout
/// and stderr redirected into the job's log file.
pub fn launch(batch: &Batch, job: &JobSpec, fs: &impl FileOperations) -> Result<Child> {
    fs.truncate_and_canonicalize_folder(&job.result_folder)?;
    let log_path = fs.truncate_and_canonicalize(&job.log_file)?;

    let log = File::create(&log_path).with_context(ctx!(
      "Could not truncate the log file {log_path:?}", ;
      "Ensure that you have permissions to write it",
    ))?;

    let err = log.try_clone().with_context(ctx!(
      "Could not duplicate the log file handle for {log_path:?}", ;
      "",
    ))?;

    let mut cmd = Command::new(&batch.driver);

    cmd.args(&batch.driver_arguments)
        .args(&job.arguments)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log))
        .stderr(Stdio::from(err));

    // The child gets its own process group, an interrupt aimed at the
    // launcher's terminal must not take the jobs down with it.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    debug!("Spawning {cmd:?}");

    let driver = &batch.driver;
    let dataset = &job.dataset;

    cmd.spawn().with_context(ctx!(
      "Could not start the driver {driver:?} for dataset {dataset}", ;
      "Ensure that the driver exists and is executable",
    ))
}

#[cfg(test)]
#[path = "tests/dispatch.rs"]
mod tests;
