use pretty_assertions::assert_eq;

use super::support::FakeWorkspace;
use super::support::arg_lines;
use super::support::cli_script;
use super::support::printed_var;

fn cli_invocation(args: &[&str]) -> anyhow::Result<Vec<String>> {
    let mut expected = vec![
        "-Q".to_string(),
        "--script".to_string(),
        cli_script()?.display().to_string(),
        "--".to_string(),
    ];
    expected.extend(args.iter().map(|arg| (*arg).to_string()));
    Ok(expected)
}

#[test]
fn no_arguments_runs_cli_help() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    let output = workspace.cask().output()?;

    assert!(output.status.success(), "cask failed: {output:?}");
    assert_eq!(arg_lines(&output), cli_invocation(&["help"])?);
    Ok(())
}

#[test]
fn bare_exec_behaves_like_no_arguments() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    let bare = workspace.cask().output()?;
    let exec = workspace.cask().arg("exec").output()?;

    assert!(exec.status.success(), "cask exec failed: {exec:?}");
    assert_eq!(exec.stdout, bare.stdout);
    Ok(())
}

#[test]
fn forwards_arguments_verbatim_without_activation() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    let output = workspace
        .cask()
        .args(["install", "--verbose", "exec"])
        .env("EMACSLOADPATH", "/untouched/lisp")
        .output()?;

    assert!(output.status.success(), "cask failed: {output:?}");
    assert_eq!(
        arg_lines(&output),
        cli_invocation(&["install", "--verbose", "exec"])?
    );
    assert_eq!(printed_var(&output, "PATH").as_deref(), Some("/usr/bin:/bin"));
    assert_eq!(
        printed_var(&output, "EMACSLOADPATH").as_deref(),
        Some("/untouched/lisp")
    );
    Ok(())
}

#[test]
fn missing_runtime_is_reported_on_one_line() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    workspace
        .cask()
        .arg("install")
        .env("CASK_EMACS", "/nonexistent/emacs")
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            "cask install: error: Emacs does not exist at /nonexistent/emacs. Did you install Emacs?\n",
        );
    Ok(())
}

#[test]
fn missing_runtime_without_subcommand_omits_it() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    workspace
        .cask()
        .env("CASK_EMACS", "/nonexistent/emacs")
        .assert()
        .code(1)
        .stderr("cask: error: Emacs does not exist at /nonexistent/emacs. Did you install Emacs?\n");
    Ok(())
}

#[test]
fn travis_drops_leading_system_bin_dir() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    let output = workspace
        .cask()
        .env("TRAVIS", "true")
        .env("PATH", "/usr/local/bin:/usr/bin:/bin")
        .output()?;

    assert!(output.status.success(), "cask failed: {output:?}");
    assert_eq!(printed_var(&output, "PATH").as_deref(), Some("/usr/bin:/bin"));
    Ok(())
}

#[test]
fn path_is_kept_outside_travis() -> anyhow::Result<()> {
    let workspace = FakeWorkspace::new()?;

    let output = workspace
        .cask()
        .env("PATH", "/usr/local/bin:/usr/bin:/bin")
        .output()?;

    assert!(output.status.success(), "cask failed: {output:?}");
    assert_eq!(
        printed_var(&output, "PATH").as_deref(),
        Some("/usr/local/bin:/usr/bin:/bin")
    );
    Ok(())
}
