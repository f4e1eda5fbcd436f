use std::ffi::OsString;

use crate::error::EnvironmentError;
use crate::resolver::PathKind;
use crate::resolver::PathResolver;
use crate::vars::CASK_EMACS_VAR;
use crate::vars::EMACS_VAR;
use crate::vars::LOAD_PATH_VAR;
use crate::vars::PATH_VAR;
use crate::vars::set_var;

/// The values written into the process environment by [`activate_workspace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEnvironment {
    pub load_path: OsString,
    pub exec_path: OsString,
    /// `CASK_EMACS` when present (even empty), mirrored into `EMACS` so
    /// Emacs-side tooling sees it.
    pub emacs: Option<OsString>,
}

/// Activates the workspace in the current process.
///
/// `EMACSLOADPATH` is written before `PATH` is resolved, so the second
/// resolver call already runs with the workspace load path. `PATH` is
/// replaced outright: only what the resolver reports stays visible. There is
/// no way to undo this, and calling it again just writes the same values.
///
/// IMPORTANT: This function modifies the environment, so it MUST be called
/// while the process is still single-threaded.
pub fn activate_workspace<R>(resolver: &R) -> Result<WorkspaceEnvironment, EnvironmentError>
where
    R: PathResolver + ?Sized,
{
    let load_path = resolver.resolve(PathKind::LoadPath)?;
    set_var(LOAD_PATH_VAR, &load_path);

    let exec_path = resolver.resolve(PathKind::ExecPath)?;
    set_var(PATH_VAR, &exec_path);

    let emacs = std::env::var_os(CASK_EMACS_VAR);
    if let Some(emacs) = &emacs {
        set_var(EMACS_VAR, emacs);
    }

    Ok(WorkspaceEnvironment {
        load_path,
        exec_path,
        emacs,
    })
}
