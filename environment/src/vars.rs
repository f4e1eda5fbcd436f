//! Names of the environment variables read and written during activation.

use std::ffi::OsStr;
use std::ffi::OsString;

/// Executable search path, overwritten on activation.
pub const PATH_VAR: &str = "PATH";

/// Emacs module search path, overwritten on activation.
pub const LOAD_PATH_VAR: &str = "EMACSLOADPATH";

/// Generic Emacs override, also read by Emacs-side tooling.
pub const EMACS_VAR: &str = "EMACS";

/// Cask-specific Emacs override. Wins over [`EMACS_VAR`].
pub const CASK_EMACS_VAR: &str = "CASK_EMACS";

/// Set to `"true"` by Travis CI.
pub const CI_VAR: &str = "TRAVIS";

/// Reads `key`, treating an empty value the same as an unset one.
pub(crate) fn non_empty_var_os(key: &str) -> Option<OsString> {
    std::env::var_os(key).filter(|value| !value.is_empty())
}

pub(crate) fn set_var(key: &str, value: &OsStr) {
    tracing::debug!(key, value = %value.to_string_lossy(), "setting environment variable");
    // It is safe to call set_var() because the dispatcher is single-threaded
    // and the process image is replaced right after activation.
    unsafe { std::env::set_var(key, value) };
}
