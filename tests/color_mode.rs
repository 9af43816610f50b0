use assert_cmd::Command;
use predicates::prelude::*;

fn mark(home: &assert_fs::TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mark").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_color_flag_values_accepted() {
    let home = assert_fs::TempDir::new().unwrap();
    for flag in ["--color=always", "--color=auto", "--color=never"] {
        mark(&home).args([flag, "list"]).assert().success();
    }
}

#[test]
fn test_color_flag_invalid() {
    let home = assert_fs::TempDir::new().unwrap();
    mark(&home)
        .args(["--color=invalid", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'invalid'"));
}

#[test]
fn test_color_flag_case_insensitive() {
    let home = assert_fs::TempDir::new().unwrap();
    mark(&home).args(["--color=ALWAYS", "list"]).assert().success();
    mark(&home).args(["--color=Never", "list"]).assert().success();
}

#[test]
fn test_color_flag_after_command() {
    let home = assert_fs::TempDir::new().unwrap();
    mark(&home).args(["list", "--color=never"]).assert().success();
}

#[test]
fn test_no_color_env_disables_messages_color() {
    let home = assert_fs::TempDir::new().unwrap();
    mark(&home)
        .env("NO_COLOR", "1")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains('\x1b').not());
}

#[test]
fn test_color_flag_overrides_no_color() {
    let home = assert_fs::TempDir::new().unwrap();
    mark(&home)
        .env("NO_COLOR", "1")
        .args(["--color=always", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains('\x1b'));
}
