use std::ffi::OsStr;
use std::path::Path;

use crate::error::CaskError;

/// Used when the OS did not hand us a usable argv[0].
const FALLBACK_PROGRAM_NAME: &str = "cask";

/// `<program>[ <subcommand>]: error: <message>`
pub fn format_error_line(
    program: Option<&OsStr>,
    subcommand: Option<&OsStr>,
    err: &CaskError,
) -> String {
    let program = program
        .and_then(|program| Path::new(program).file_name())
        .map_or_else(
            || FALLBACK_PROGRAM_NAME.to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
    match subcommand {
        Some(subcommand) => format!("{program} {}: error: {err}", subcommand.to_string_lossy()),
        None => format!("{program}: error: {err}"),
    }
}

/// Prints `err` to stderr and exits with status 1.
pub fn report_and_exit(
    program: Option<&OsStr>,
    subcommand: Option<&OsStr>,
    err: &CaskError,
) -> ! {
    eprintln!("{}", format_error_line(program, subcommand, err));
    std::process::exit(1);
}
