use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn cli() -> Command {
    cargo_bin_cmd!("stowage-cli")
}

#[test]
fn demo_runs_the_full_narrative() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error").arg("demo");

    cmd.assert()
        .success()
        .stdout(contains("Load rejected"))
        .stdout(contains("Ship Albatross"))
        .stdout(contains("Ship Petrel"))
        .stdout(contains("After the transfer:"))
        .stdout(contains("After the swap"))
        .stdout(contains("After discharging the helium:"));
}

#[test]
fn demo_shows_the_gas_residual() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error").arg("demo");

    cmd.assert()
        .success()
        .stdout(contains("Container KON-G-3"))
        .stdout(contains("cargo: 60kg"));
}

#[test]
fn products_lists_required_temperatures() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error").arg("products");

    cmd.assert()
        .success()
        .stdout(contains("Known refrigerated products (10):"))
        .stdout(contains("Bananas"))
        .stdout(contains("13.3"))
        .stdout(contains("Frozen pizza"));
}

#[test]
fn products_json_output_is_valid() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error").args(["products", "--json"]);

    let assert = cmd.assert().success();
    let output = assert.get_output();
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");
    assert_eq!(parsed.as_array().map(Vec::len), Some(10));
}
