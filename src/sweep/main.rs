//! Sweep launches one detached experiment-driver process per dataset,
//! giving every job its own result folder and log file.

/// The command line interface and relevant structures.
pub mod cli;

/// Turning planned jobs into detached driver processes.
pub mod dispatch;

/// Writing a template configuration for new sweeps.
pub mod init;

/// Convenience functions for unit tests.
#[cfg(test)]
pub mod test_utils;

/// The main CLI entry-point of the `sweep` utility.
///
/// This function parses command-line arguments and executes
/// sub-commands as specified by the user.
fn main() {
    cli::process::parse_command();
}
