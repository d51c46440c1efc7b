//! CLI integration tests for dicfg.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{create_empty_tree, create_training_tree, create_tree, ConfigTree};

/// Get a Command for the dicfg binary.
fn dicfg() -> Command {
    cargo_bin_cmd!("dicfg")
}

/// Get a Command running inside a config tree, isolated from the user's
/// own settings and log filter.
fn dicfg_in(tree: &ConfigTree) -> Command {
    let mut cmd = dicfg();
    cmd.current_dir(tree.path())
        .env("HOME", tree.path())
        .env("XDG_CONFIG_HOME", tree.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    dicfg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Read layered configuration"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--preset"))
        .stdout(predicate::str::contains("--user-config"))
        .stdout(predicate::str::contains("--context-key"));
}

#[test]
fn test_version_output() {
    dicfg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dicfg"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_name_is_required() {
    dicfg()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn test_completions() {
    dicfg()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dicfg"));
}

#[test]
fn test_example_settings() {
    dicfg()
        .arg("--example-settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("[reader]"))
        .stdout(predicate::str::contains("[output]"));
}

// ==================== Reading ====================

#[test]
fn test_read_main_config() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "-k", "train", "-k", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shuffle\": true"))
        .stdout(predicate::str::contains("\"format\": \"parquet\""));
}

#[test]
fn test_overrides() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "model.seed=5", "other.seed=6", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seed\":5"));
}

#[test]
fn test_presets_in_order() {
    let tree = create_training_tree();
    tree.write("configs/presets/slow.yml", "seed: 3\n");

    dicfg_in(&tree)
        .args(["model", "-p", "fast", "-p", "slow", "--get", "seed"])
        .assert()
        .success()
        .stdout("3\n");

    dicfg_in(&tree)
        .args(["model", "-p", "slow", "-p", "fast", "--get", "seed"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_user_config() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "-u", "users/alice.yml", "--get", "seed"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_override_beats_user_config() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "-u", "users/alice.yml", "model.seed=0", "--get", "seed"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_custom_main_config_path() {
    let tree = create_empty_tree();
    tree.write("elsewhere/main.json", r#"{"name": "custom"}"#);

    dicfg_in(&tree)
        .args(["model", "-c", "elsewhere/main.json", "--get", "name"])
        .assert()
        .success()
        .stdout("\"custom\"\n");
}

#[test]
fn test_search_path_flag() {
    let tree = create_tree("db: shared_db.yml\n");
    tree.write("shared/shared_db.yml", "host: db.internal\n");

    dicfg_in(&tree)
        .args(["model", "-s", "shared", "--get", "db.host"])
        .assert()
        .success()
        .stdout("\"db.internal\"\n");
}

// ==================== Output Formats ====================

#[test]
fn test_yaml_output() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "-f", "yaml", "--get", "data"])
        .assert()
        .success()
        .stdout("path: /data/train\nformat: parquet\n");
}

#[test]
fn test_toml_output() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "--format", "toml", "--get", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path = \"/data/train\""))
        .stdout(predicate::str::contains("format = \"parquet\""));
}

#[test]
fn test_toml_rejects_null() {
    let tree = create_tree("nothing: null\n");

    dicfg_in(&tree)
        .args(["model", "-f", "toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to render output as toml"))
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn test_get_missing_path() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "--get", "data.missing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No value at 'data.missing'"));
}

// ==================== Error Exit Codes ====================

#[test]
fn test_missing_main_config() {
    let tree = create_empty_tree();

    dicfg_in(&tree)
        .arg("model")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error: No main config file found"));
}

#[test]
fn test_missing_preset() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "-p", "nope"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'nope'"));
}

#[test]
fn test_unsupported_format() {
    let tree = create_empty_tree();
    tree.write("configs/config.ini", "[main]\n");

    dicfg_in(&tree)
        .args(["model", "-c", "configs/config.ini"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(".ini"));
}

#[test]
fn test_missing_named_section() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["modle", "-u", "users/alice.yml"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No section named 'modle'"))
        .stderr(predicate::str::contains("Did you mean: 'model'?"));
}

#[test]
fn test_malformed_config() {
    let tree = create_tree("a: {b: 1\n");

    dicfg_in(&tree)
        .arg("model")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Failed to parse YAML config"));
}

// ==================== Settings ====================

#[test]
fn test_project_settings() {
    let tree = create_training_tree();
    tree.write(
        ".dicfg.toml",
        "[reader]\ncontext_keys = [\"train\"]\n\n[output]\nformat = \"yaml\"\n",
    );

    dicfg_in(&tree)
        .args(["model", "--get", "train.batch_size"])
        .assert()
        .success()
        .stdout("32\n");

    dicfg_in(&tree)
        .args(["model", "--get", "train.batch_size", "--no-settings"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_user_settings() {
    let tree = create_training_tree();
    tree.write(
        ".config/dicfg/config.toml",
        "[reader]\ndefault_key = \"train\"\ncontext_keys = [\"eval\"]\n",
    );

    dicfg_in(&tree)
        .args(["model", "--get", "eval.shuffle"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_malformed_project_settings_are_skipped() {
    let tree = create_training_tree();
    tree.write(".dicfg.toml", "this is not { toml");

    dicfg_in(&tree)
        .args(["model", "--get", "seed"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("skipping settings file"));
}

#[test]
fn test_explicit_settings_not_found() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "--settings", "missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_debug_logging() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .args(["model", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("read config file"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_rust_log_sets_level_without_debug_flag() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .env("RUST_LOG", "debug")
        .arg("model")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("read config file"));
}

#[test]
fn test_rust_log_wins_over_debug_flag() {
    let tree = create_training_tree();

    dicfg_in(&tree)
        .env("RUST_LOG", "warn")
        .args(["model", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}
