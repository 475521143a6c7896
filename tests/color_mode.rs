use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn gator(home: &assert_fs::TempDir) -> Command {
    home.child(".gatorconfig.json").write_str("{}").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gator").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("GATOR_CONFIG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_color_never_has_no_escape_codes() {
    let home = assert_fs::TempDir::new().unwrap();

    gator(&home)
        .args(["--color=never", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ command not found: nope"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_color_always_has_escape_codes() {
    let home = assert_fs::TempDir::new().unwrap();

    gator(&home)
        .args(["--color=always", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command not found: nope"))
        .stderr(predicate::str::contains("\x1b["));
}

#[test]
fn test_color_flag_case_insensitive() {
    let home = assert_fs::TempDir::new().unwrap();

    gator(&home)
        .args(["--color=NEVER", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ command not found: nope"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_color_flag_invalid() {
    let home = assert_fs::TempDir::new().unwrap();

    gator(&home)
        .args(["--color=invalid", "login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'invalid'"));
}

#[test]
fn test_no_color_env_disables_colors() {
    let home = assert_fs::TempDir::new().unwrap();

    gator(&home)
        .env("NO_COLOR", "1")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ command not found: nope"))
        .stderr(predicate::str::contains("\x1b[").not());
}
