//! The data model of `sweep`: configuration, planned batches, and the
//! plumbing shared across the CLI.

/// A struct and related methods for global configuration,
/// declaratively specifying sweeps.
pub mod config;

/// Planning batches of driver invocations.
pub mod batch;

/// Common file operations.
pub mod file_system;

/// The error handling for `sweep`.
pub mod error;

/// Constant values.
pub mod constants;

/// Helper functions for testing, only compiled in test mode.
#[cfg(test)]
mod test_utils;
