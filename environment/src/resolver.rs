use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use tracing::debug;

use crate::error::EnvironmentError;
use crate::error::display_command;

/// Which search path to ask the resolution CLI for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Executable search path, destined for `PATH`.
    ExecPath,
    /// Emacs module search path, destined for `EMACSLOADPATH`.
    LoadPath,
}

impl PathKind {
    /// The positional argument the resolution CLI expects for this kind.
    pub fn selector(self) -> &'static str {
        match self {
            PathKind::ExecPath => "path",
            PathKind::LoadPath => "load-path",
        }
    }
}

pub trait PathResolver {
    /// Returns the path-list string for `kind`, exactly as the workspace
    /// reports it.
    fn resolve(&self, kind: PathKind) -> Result<OsString, EnvironmentError>;
}

/// Resolves paths by re-running the dispatcher itself with a bare selector,
/// which routes the request to `cask-cli.el`.
#[derive(Debug, Clone)]
pub struct CliPathResolver {
    program: PathBuf,
}

impl CliPathResolver {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Resolver that re-enters the currently running executable.
    pub fn for_current_exe() -> Result<Self, EnvironmentError> {
        let program = std::env::current_exe().map_err(EnvironmentError::InstallRoot)?;
        Ok(Self::new(program))
    }
}

impl PathResolver for CliPathResolver {
    fn resolve(&self, kind: PathKind) -> Result<OsString, EnvironmentError> {
        let command = vec![
            self.program.clone().into_os_string(),
            OsString::from(kind.selector()),
        ];
        debug!(command = %display_command(&command), "resolving workspace path");

        let output = Command::new(&self.program)
            .arg(kind.selector())
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output();
        let output = match output {
            Ok(output) => output,
            Err(source) => return Err(EnvironmentError::FailedSubprocess { command, source }),
        };

        if !output.status.success() {
            let source = std::io::Error::other(format!(
                "{} failed with {}",
                display_command(&command),
                output.status
            ));
            return Err(EnvironmentError::FailedSubprocess { command, source });
        }

        let mut stdout = output.stdout;
        strip_line_terminator(&mut stdout);
        let resolved = os_string_from_bytes(stdout);
        debug!(
            selector = kind.selector(),
            value = %resolved.to_string_lossy(),
            "resolved workspace path"
        );
        Ok(resolved)
    }
}

/// Drops one trailing `\n` or `\r\n`, leaving every other byte alone.
fn strip_line_terminator(bytes: &mut Vec<u8>) {
    if bytes.ends_with(b"\r\n") {
        bytes.truncate(bytes.len() - 2);
    } else if bytes.ends_with(b"\n") {
        bytes.pop();
    }
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;

    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
