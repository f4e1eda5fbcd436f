use std::ffi::OsString;

/// Runs an arbitrary command inside the activated workspace.
pub const EXEC_SUBCOMMAND: &str = "exec";

/// Runs the workspace's Emacs directly.
pub const EMACS_SUBCOMMAND: &str = "emacs";

/// What `cask` and a bare `cask exec` run instead.
pub const DEFAULT_COMMAND: &str = "help";

/// How an invocation is handed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Forward every argument to `cask-cli.el`.
    Passthrough(Vec<OsString>),
    /// Run Emacs with these arguments in the activated workspace.
    RuntimeDirect(Vec<OsString>),
    /// Run this command in the activated workspace. Never empty.
    ExecExternal(Vec<OsString>),
}

impl Mode {
    pub fn classify(args: &[OsString]) -> Self {
        match args.split_first() {
            Some((subcommand, rest)) if subcommand == EXEC_SUBCOMMAND => {
                if rest.is_empty() {
                    Mode::Passthrough(vec![OsString::from(DEFAULT_COMMAND)])
                } else {
                    Mode::ExecExternal(rest.to_vec())
                }
            }
            Some((subcommand, rest)) if subcommand == EMACS_SUBCOMMAND => {
                Mode::RuntimeDirect(rest.to_vec())
            }
            Some(_) => Mode::Passthrough(args.to_vec()),
            None => Mode::Passthrough(vec![OsString::from(DEFAULT_COMMAND)]),
        }
    }

    /// Whether the workspace must be activated before the hand-off.
    pub fn activates_workspace(&self) -> bool {
        !matches!(self, Mode::Passthrough(_))
    }
}
