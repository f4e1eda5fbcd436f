//! The `cask` dispatcher.
//!
//! `cask` never does package work itself. It either hands its arguments to
//! `cask-cli.el`, or activates the workspace and becomes Emacs or an
//! arbitrary command.

mod error;
mod exec;
mod mode;
mod report;

use std::convert::Infallible;
use std::ffi::OsString;
use std::io::IsTerminal;

use cask_environment::CliPathResolver;
use cask_environment::activate_workspace;
use cask_environment::apply_ci_path_workaround;
use cask_environment::resolve_runtime;
use cask_utils_install_root::cli_script_path;
use cask_utils_install_root::find_install_root;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use error::CaskError;
pub use mode::DEFAULT_COMMAND;
pub use mode::EMACS_SUBCOMMAND;
pub use mode::EXEC_SUBCOMMAND;
pub use mode::Mode;
pub use report::format_error_line;
pub use report::report_and_exit;

use crate::exec::passthrough_command;
use crate::exec::replace_process;

const DEFAULT_LOG_LEVEL: &str = "error";

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`. Silent by
/// default so diagnostics stay a single line.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

/// Dispatches `args` (argv without the program name). On success the
/// process has been replaced, so this only ever returns an error.
pub fn run(args: &[OsString]) -> Result<Infallible, CaskError> {
    apply_ci_path_workaround();

    let mode = Mode::classify(args);
    debug!(?mode, "dispatching");

    if mode.activates_workspace() {
        let resolver = CliPathResolver::for_current_exe()?;
        let workspace = activate_workspace(&resolver)?;
        debug!(?workspace, "workspace activated");
    }

    match mode {
        Mode::Passthrough(args) => {
            let runtime = resolve_runtime();
            let install_root = find_install_root().map_err(CaskError::OsFailure)?;
            debug!(install_root = %install_root.display(), "running resolution CLI");
            let command = passthrough_command(&runtime, &cli_script_path(&install_root), args);
            let source = replace_process(&command);
            if source.kind() == std::io::ErrorKind::NotFound {
                Err(CaskError::MissingRuntime {
                    runtime: runtime.to_string_lossy().into_owned(),
                })
            } else {
                Err(CaskError::FailedExec { command, source })
            }
        }
        Mode::RuntimeDirect(args) => {
            let mut command = vec![resolve_runtime()];
            command.extend(args);
            let source = replace_process(&command);
            Err(CaskError::FailedExec { command, source })
        }
        Mode::ExecExternal(command) => {
            let source = replace_process(&command);
            Err(CaskError::FailedExec { command, source })
        }
    }
}
