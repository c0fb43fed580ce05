use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Isolated home, project and script directories for one CLI run
struct Sandbox {
    home: TempDir,
    project: TempDir,
    scripts: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
            scripts: TempDir::new().unwrap(),
        }
    }

    fn write_script(&self, name: &str, body: &str) {
        fs::write(self.scripts.path().join(name), body).unwrap();
    }

    fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mind-glaive").unwrap();
        cmd.current_dir(self.project.path())
            .env("HOME", self.home.path())
            .env_remove("USERPROFILE")
            .env_remove("RUST_LOG")
            .env_remove("MIND_GLAIVE_SCRIPT_DIR")
            .env_remove("MIND_GLAIVE_INTERPRETER");
        cmd
    }

    /// CLI pointed at the stub scripts
    fn delegating_cli(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--script-dir").arg(self.scripts.path());
        cmd
    }

    fn invocation(&self) -> Option<String> {
        fs::read_to_string(self.project.path().join("invocation.txt")).ok()
    }
}

const RECORDING_SCRIPT: &str = "printf '%s ' \"$@\" > \"$MIND_GLAIVE_PROJECT_DIR/invocation.txt\"\n";

const MARKER_SCRIPT: &str = "\
dir=\"$MIND_GLAIVE_PROJECT_DIR/.claude\"
mkdir -p \"$dir\"
touch \"$dir/CLAUDE.md\" \"$dir/hooks.json\"
";

fn install_markers(root: &Path) {
    let dir = root.join(".claude");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("CLAUDE.md"), "# context").unwrap();
    fs::write(dir.join("hooks.json"), "{}").unwrap();
}

#[test]
fn test_no_arguments_prints_usage() {
    let sandbox = Sandbox::new();
    sandbox
        .cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("install"));
}

#[test]
fn test_help_aliases_exit_zero() {
    let sandbox = Sandbox::new();
    for alias in ["help", "--help", "-h"] {
        sandbox
            .cli()
            .arg(alias)
            .assert()
            .success()
            .stdout(predicate::str::contains("/context/optimize"));
    }
}

#[test]
fn test_unknown_command_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cli()
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: frobnicate"))
        .stderr(predicate::str::contains("mind-glaive help"));
}

#[test]
fn test_status_nothing_installed() {
    let sandbox = Sandbox::new();
    sandbox
        .cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not installed").count(2))
        .stdout(predicate::str::contains("Run: mind-glaive install"));
}

#[test]
fn test_status_reports_each_scope() {
    let sandbox = Sandbox::new();
    install_markers(sandbox.home.path());

    sandbox
        .cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Installed").count(1))
        .stdout(predicate::str::contains("Not installed").count(1))
        .stdout(predicate::str::contains("Run: mind-glaive install").not());
}

#[test]
fn test_status_ignores_extra_arguments() {
    let sandbox = Sandbox::new();
    sandbox
        .cli()
        .args(["status", "--scope", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not installed").count(2));
}

#[test]
fn test_global_flag_after_command_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", RECORDING_SCRIPT);

    sandbox
        .cli()
        .args(["install", "--scope", "project", "--script-dir"])
        .arg(sandbox.scripts.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "'--script-dir' must be given before the command",
        ))
        .stderr(predicate::str::contains("mind-glaive help"));

    assert_eq!(sandbox.invocation(), None);
}

#[test]
fn test_install_delegates_to_script() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", RECORDING_SCRIPT);

    sandbox
        .delegating_cli()
        .args(["install", "--scope", "project", "--template", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing mind-glaive..."))
        .stdout(predicate::str::contains("Template: minimal"))
        .stderr(predicate::str::is_empty());

    assert_eq!(
        sandbox.invocation().as_deref(),
        Some("--scope project --template minimal ")
    );
}

#[test]
fn test_install_defaults() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", RECORDING_SCRIPT);

    sandbox
        .delegating_cli()
        .arg("install")
        .assert()
        .success();

    assert_eq!(
        sandbox.invocation().as_deref(),
        Some("--scope user --template minimal ")
    );
}

#[test]
fn test_install_then_status() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", MARKER_SCRIPT);

    sandbox
        .delegating_cli()
        .args(["install", "--scope", "project"])
        .assert()
        .success();

    sandbox
        .delegating_cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not installed").count(1));
}

#[test]
fn test_missing_interpreter_skips_script() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", RECORDING_SCRIPT);

    sandbox
        .delegating_cli()
        .args(["--interpreter", "mind-glaive-no-such-shell", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is required but not found"))
        .stderr(predicate::str::contains("Install bash"))
        .stdout(predicate::str::contains("Installing").not());

    assert_eq!(sandbox.invocation(), None);
}

#[test]
fn test_failing_uninstall_script() {
    let sandbox = Sandbox::new();
    sandbox.write_script("uninstall.sh", "echo 'nothing to remove' >&2\nexit 5\n");

    sandbox
        .delegating_cli()
        .args(["uninstall", "--scope", "project"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing to remove"))
        .stderr(predicate::str::contains("Uninstallation failed"));
}

#[test]
fn test_uninstall_passes_scope_only() {
    let sandbox = Sandbox::new();
    sandbox.write_script("uninstall.sh", RECORDING_SCRIPT);

    sandbox
        .delegating_cli()
        .args(["uninstall", "--scope", "project"])
        .assert()
        .success();

    assert_eq!(sandbox.invocation().as_deref(), Some("--scope project "));
}

#[test]
fn test_scope_without_value_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", RECORDING_SCRIPT);

    sandbox
        .delegating_cli()
        .args(["install", "--scope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing value for --scope"));

    assert_eq!(sandbox.invocation(), None);
}

#[test]
fn test_unknown_scope_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.write_script("install.sh", RECORDING_SCRIPT);

    sandbox
        .delegating_cli()
        .args(["install", "--scope", "global"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown scope 'global'"));

    assert_eq!(sandbox.invocation(), None);
}

#[test]
fn test_postinstall_banner() {
    Command::cargo_bin("mind-glaive-postinstall")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("mind-glaive installed successfully!"))
        .stdout(predicate::str::contains("mind-glaive status"));
}
