use std::ffi::OsStr;
use std::ffi::OsString;

use crate::vars::CASK_EMACS_VAR;
use crate::vars::EMACS_VAR;
use crate::vars::non_empty_var_os;

/// Runtime used when neither override variable is set.
pub const DEFAULT_RUNTIME: &str = "emacs";

/// Returns the Emacs to run: `CASK_EMACS`, then `EMACS`, then `emacs` from
/// the search path.
pub fn resolve_runtime() -> OsString {
    let cask_emacs = non_empty_var_os(CASK_EMACS_VAR);
    let emacs = non_empty_var_os(EMACS_VAR);
    resolve_runtime_from_env(cask_emacs.as_deref(), emacs.as_deref())
}

pub fn resolve_runtime_from_env(cask_emacs: Option<&OsStr>, emacs: Option<&OsStr>) -> OsString {
    [cask_emacs, emacs]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map_or_else(|| OsString::from(DEFAULT_RUNTIME), OsStr::to_os_string)
}
