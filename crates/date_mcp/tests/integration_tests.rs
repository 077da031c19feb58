use assert_cmd::Command;
use predicates::prelude::*;

fn date_server() -> Command {
    let mut cmd = Command::cargo_bin("mcp-server-date").unwrap();
    cmd.env_remove("DATE_MCP_LOCATIONS").env_remove("RUST_LOG");
    cmd
}

/// Test CLI help output
#[test]
fn test_cli_help() {
    date_server()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--locations"));
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    date_server().arg("--version").assert().success();
}

/// Test listing the built-in catalog
#[test]
fn test_list_builtin_locations() {
    date_server()
        .arg("--list-locations")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available locations:"))
        .stdout(predicate::str::contains("Tokyo (Asia/Tokyo)"))
        .stdout(predicate::str::contains("New York (America/New_York)"));
}

/// Test overrides from the environment
#[test]
fn test_list_locations_with_env_overrides() {
    date_server()
        .env("DATE_MCP_LOCATIONS", "Berlin=Asia/Tokyo,Bad,Kathmandu=Asia/Kathmandu")
        .arg("--list-locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Berlin (Asia/Tokyo)"))
        .stdout(predicate::str::contains("Kathmandu (Asia/Kathmandu)"))
        .stdout(predicate::str::contains("Bad").not())
        .stdout(predicate::str::contains("Berlin (Europe/Berlin)").not());
}

/// Test overrides from the command line
#[test]
fn test_list_locations_with_flag() {
    date_server()
        .args(["--locations", "Home=Europe/Lisbon", "--list-locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home (Europe/Lisbon)"));
}

/// Test that an unknown timezone is skipped rather than fatal
#[test]
fn test_invalid_override_is_not_fatal() {
    date_server()
        .env("DATE_MCP_LOCATIONS", "Atlantis=Ocean/Atlantis")
        .arg("--list-locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Atlantis").not());
}
