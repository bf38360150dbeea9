//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn whosthat() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("whosthat").unwrap();
    cmd.env_remove("WHOSTHAT_API_URL").env_remove("RUST_LOG");
    cmd
}

fn write_creatures(dir: &Path, names: &[&str]) -> PathBuf {
    let records: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let lower = name.to_lowercase();
            serde_json::json!({
                "id": i + 1,
                "name": name,
                "silhouette": format!("{lower}-silhouette.png"),
                "image": format!("{lower}.png"),
            })
        })
        .collect();
    let path = dir.join("creatures.json");
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
    path
}

const FIVE: &[&str] = &["Pikachu", "Charmander", "Bulbasaur", "Squirtle", "Jigglypuff"];

#[test]
fn play_one_round_from_file() {
    let dir = TempDir::new().unwrap();
    let file = write_creatures(dir.path(), FIVE);

    whosthat()
        .current_dir(dir.path())
        .args(["play", "--seed", "7", "--rounds", "1", "--file"])
        .arg(&file)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Round 1"))
        .stdout(predicate::str::contains("-silhouette.png"))
        .stdout(predicate::str::contains("It's"))
        .stdout(predicate::str::contains("Final score:"))
        .stdout(predicate::str::contains("(1 round(s))"));
}

#[test]
fn play_writes_summary() {
    let dir = TempDir::new().unwrap();
    let file = write_creatures(dir.path(), FIVE);
    let summary = dir.path().join("summary.json");

    whosthat()
        .current_dir(dir.path())
        .args(["play", "--seed", "3", "--file"])
        .arg(&file)
        .arg("--summary")
        .arg(&summary)
        .write_stdin("2\n\n3\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary written to"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["rounds_played"], 2);
    assert_eq!(json["answers_given"], 2);
    assert!(json["score"].as_u64().unwrap() <= 2);
}

#[test]
fn play_with_too_few_creatures_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_creatures(dir.path(), &["Pikachu", "Charmander"]);

    whosthat()
        .current_dir(dir.path())
        .args(["play", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough creatures to display."))
        .stderr(predicate::str::contains("could not start a round"))
        .stderr(predicate::str::contains("2 creature(s)"));
}

#[test]
fn play_with_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    whosthat()
        .current_dir(dir.path())
        .args(["play", "--file", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There was a problem with the fetch operation",
        ))
        .stderr(predicate::str::contains("could not start a round"));
}

#[test]
fn zero_rounds_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_creatures(dir.path(), FIVE);

    whosthat()
        .current_dir(dir.path())
        .args(["play", "--rounds", "0", "--file"])
        .arg(&file)
        .write_stdin("1\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Round 1").not());
}

#[test]
fn list_prints_table() {
    let dir = TempDir::new().unwrap();
    let file = write_creatures(dir.path(), FIVE);

    whosthat()
        .current_dir(dir.path())
        .args(["list", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Jigglypuff"))
        .stdout(predicate::str::contains("squirtle-silhouette.png"))
        .stdout(predicate::str::contains("5 creature(s)"));
}

#[test]
fn list_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    whosthat()
        .current_dir(dir.path())
        .args(["list", "--file", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load creatures from file source"));
}

#[test]
fn url_and_file_conflict() {
    whosthat()
        .args(["list", "--url", "http://localhost:1", "--file", "x.json"])
        .assert()
        .failure();
}

#[test]
fn missing_config_fails() {
    whosthat()
        .args(["list", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    whosthat()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created whosthat.toml"))
        .stdout(predicate::str::contains("Created creatures.json"));

    assert!(dir.path().join("whosthat.toml").exists());
    assert!(dir.path().join("creatures.json").exists());

    // The generated config points at the generated file.
    whosthat()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eevee"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("whosthat.toml"), "").unwrap();

    whosthat()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("whosthat.toml already exists"));
}

#[test]
fn help_lists_commands() {
    whosthat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"));
}
