use std::ffi::OsString;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// The resolution CLI could not be run, or it exited unsuccessfully.
    #[error("{source}")]
    FailedSubprocess {
        command: Vec<OsString>,
        source: std::io::Error,
    },
    #[error(transparent)]
    InstallRoot(std::io::Error),
}

/// Renders an argv for diagnostics, one space between arguments.
pub fn display_command(command: &[OsString]) -> String {
    command
        .iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
