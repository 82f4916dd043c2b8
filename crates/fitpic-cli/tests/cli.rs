use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn fitpic() -> Command {
    let mut cmd = Command::cargo_bin("fitpic").unwrap();
    cmd.env_remove("FITPIC_PATH").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    fitpic()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fitpic"));
}

#[test]
fn test_cli_help_lists_commands() {
    fitpic()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("outfits"))
        .stdout(predicate::str::contains("cart"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("delete-account"));
}

#[test]
fn test_data_dir_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("from-env");

    fitpic()
        .env("FITPIC_PATH", &data_dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert!(data_dir.join("config.toml").exists());
}

#[test]
fn test_errors_go_to_stderr_with_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    fitpic()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["lookup", "products", "hats"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Unknown category 'hats'"));
}

#[test]
fn test_invalid_phone_in_plain_output() {
    let temp_dir = TempDir::new().unwrap();

    fitpic()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["lookup", "phone", "12-34"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid"));
}

#[test]
fn test_malformed_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "[timings\n").unwrap();

    fitpic()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
