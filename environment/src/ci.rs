use std::ffi::OsStr;
use std::ffi::OsString;

use crate::vars::CI_VAR;
use crate::vars::PATH_VAR;
use crate::vars::set_var;

/// Travis CI puts this directory ahead of the toolchain it installed, which
/// shadows the Emacs under test.
pub const CI_SYSTEM_BIN_DIR: &str = "/usr/local/bin";

/// Drops [`CI_SYSTEM_BIN_DIR`] from the front of `PATH` when running on
/// Travis CI. Must run before anything else reads `PATH`.
pub fn apply_ci_path_workaround() {
    let ci = std::env::var(CI_VAR).ok();
    let path = std::env::var_os(PATH_VAR);
    if let Some(stripped) = strip_ci_path_entry(ci.as_deref(), path.as_deref()) {
        set_var(PATH_VAR, &stripped);
    }
}

/// Returns the new `PATH` value, or `None` when it should stay untouched.
pub fn strip_ci_path_entry(ci: Option<&str>, path: Option<&OsStr>) -> Option<OsString> {
    if ci != Some("true") {
        return None;
    }
    let mut entries = std::env::split_paths(path?);
    if entries.next()?.as_os_str() != OsStr::new(CI_SYSTEM_BIN_DIR) {
        return None;
    }
    std::env::join_paths(entries).ok()
}
