use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Flags every resolution CLI run is started with.
const RUNTIME_SCRIPT_FLAGS: [&str; 2] = ["-Q", "--script"];

/// `<runtime> -Q --script <script> -- <args...>`
pub(crate) fn passthrough_command(
    runtime: &OsStr,
    script: &Path,
    args: Vec<OsString>,
) -> Vec<OsString> {
    let mut command = Vec::with_capacity(args.len() + 5);
    command.push(runtime.to_os_string());
    command.extend(RUNTIME_SCRIPT_FLAGS.iter().map(OsString::from));
    command.push(script.as_os_str().to_os_string());
    command.push(OsString::from("--"));
    command.extend(args);
    command
}

/// Replaces the current process image with `command`, looking the program
/// up on the current `PATH`. Only returns if the exec itself failed.
#[cfg(unix)]
pub(crate) fn replace_process(command: &[OsString]) -> std::io::Error {
    use std::os::unix::process::CommandExt;

    let Some((program, args)) = command.split_first() else {
        return empty_command();
    };
    debug!(?command, "replacing process");
    Command::new(program).args(args).exec()
}

/// Without exec, run `command` to completion and leave with its exit code.
/// Only returns if the child could not be started.
#[cfg(not(unix))]
pub(crate) fn replace_process(command: &[OsString]) -> std::io::Error {
    let Some((program, args)) = command.split_first() else {
        return empty_command();
    };
    debug!(?command, "running child in place of this process");
    match Command::new(program).args(args).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => err,
    }
}

fn empty_command() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command")
}
