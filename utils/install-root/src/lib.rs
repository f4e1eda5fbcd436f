use std::path::Path;
use std::path::PathBuf;

/// File name of the Emacs Lisp entry point shipped at the install root.
pub const CLI_SCRIPT_FILENAME: &str = "cask-cli.el";

/// Returns the Cask install root: the parent of the directory that contains
/// the running executable, after resolving every symlink.
///
/// A `cask` binary installed as `<root>/bin/cask` and symlinked into
/// `~/.local/bin` still resolves to `<root>`.
pub fn find_install_root() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    find_install_root_from_exe(&exe)
}

/// Path of the resolution CLI script under `install_root`.
pub fn cli_script_path(install_root: &Path) -> PathBuf {
    install_root.join(CLI_SCRIPT_FILENAME)
}

fn find_install_root_from_exe(exe: &Path) -> std::io::Result<PathBuf> {
    let resolved = dunce::canonicalize(exe).map_err(|err| {
        std::io::Error::new(
            err.kind(),
            format!("failed to resolve executable path {}: {err}", exe.display()),
        )
    })?;

    resolved
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "executable {} has no install root above its directory",
                    resolved.display()
                ),
            )
        })
}
