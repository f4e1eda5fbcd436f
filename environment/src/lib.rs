//! Activation of a Cask workspace for the current process.
//!
//! The dispatcher asks the workspace's own CLI for its executable search path
//! and its Emacs load path, then installs both into the process environment
//! right before it replaces itself with the target program.

mod ci;
mod compose;
mod error;
mod resolver;
mod runtime;
pub mod vars;

pub use ci::CI_SYSTEM_BIN_DIR;
pub use ci::apply_ci_path_workaround;
pub use ci::strip_ci_path_entry;
pub use compose::WorkspaceEnvironment;
pub use compose::activate_workspace;
pub use error::EnvironmentError;
pub use error::display_command;
pub use resolver::CliPathResolver;
pub use resolver::PathKind;
pub use resolver::PathResolver;
pub use runtime::DEFAULT_RUNTIME;
pub use runtime::resolve_runtime;
pub use runtime::resolve_runtime_from_env;
