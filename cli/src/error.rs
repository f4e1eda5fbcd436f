use std::ffi::OsString;

use cask_environment::EnvironmentError;
use thiserror::Error;

/// Every way an invocation can fail. Each maps to one line on stderr and
/// exit status 1.
#[derive(Debug, Error)]
pub enum CaskError {
    #[error("Emacs does not exist at {runtime}. Did you install Emacs?")]
    MissingRuntime { runtime: String },

    #[error("{source}")]
    FailedSubprocess {
        command: Vec<OsString>,
        source: std::io::Error,
    },

    #[error(
        "Failed to execute {}: {source}\nDid you run cask install?",
        program_name(.command)
    )]
    FailedExec {
        command: Vec<OsString>,
        source: std::io::Error,
    },

    #[error(transparent)]
    OsFailure(std::io::Error),
}

impl From<EnvironmentError> for CaskError {
    fn from(err: EnvironmentError) -> Self {
        match err {
            EnvironmentError::FailedSubprocess { command, source } => {
                CaskError::FailedSubprocess { command, source }
            }
            EnvironmentError::InstallRoot(source) => CaskError::OsFailure(source),
        }
    }
}

fn program_name(command: &[OsString]) -> String {
    command
        .first()
        .map(|program| program.to_string_lossy().into_owned())
        .unwrap_or_default()
}
