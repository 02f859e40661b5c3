use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn base_command() -> Command {
    let mut cmd = Command::new(cargo_bin!("frame-drop"));
    cmd.env_clear()
        .env("NEYNAR_API_KEY", "key")
        .env("RPC_URL", "http://127.0.0.1:8545")
        .env("CONTRACT_ADDRESS", "0x20c0000000000000000000000000000000000001")
        .env("SITE_URL", "https://drop.example")
        .env("LISTEN_ADDR", "127.0.0.1:0");
    cmd
}

#[test]
fn test_missing_required_config() {
    let mut cmd = Command::new(cargo_bin!("frame-drop"));
    cmd.env_clear();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--neynar-api-key"));
}

#[test]
fn test_invalid_contract_address_aborts_startup() {
    let mut cmd = base_command();
    cmd.env("CONTRACT_ADDRESS", "0x1234");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid contract address"));
}

#[test]
fn test_missing_users_file_aborts_startup() {
    let mut cmd = base_command();
    cmd.arg("--users")
        .arg("does/not/exist.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot open users file"));
}
