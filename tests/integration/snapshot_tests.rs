//! Snapshot tests using insta.
//!
//! These tests capture and verify the rendered output of full reads.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

use crate::integration::fixtures::{create_empty_tree, create_training_tree, ConfigTree};

/// Get a Command for the dicfg binary inside a config tree.
fn dicfg_in(tree: &ConfigTree) -> Command {
    let mut cmd = cargo_bin_cmd!("dicfg");
    cmd.current_dir(tree.path())
        .env("HOME", tree.path())
        .env("XDG_CONFIG_HOME", tree.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

const FULL_READ: &[&str] = &[
    "model",
    "-k",
    "train",
    "-k",
    "test",
    "-p",
    "fast",
    "-p",
    "gpu",
    "-u",
    "users/alice.yml",
    "model.test.batch_size=128",
];

// ==================== Rendered Config Snapshots ====================

#[test]
fn test_snapshot_full_read_json() {
    let tree = create_training_tree();

    let output = dicfg_in(&tree)
        .args(FULL_READ)
        .output()
        .expect("Failed to run dicfg");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout, @r#"
{
  "train": {
    "batch_size": 32,
    "optimizer": {
      "name": "sgd",
      "lr": 0.5
    },
    "shuffle": true,
    "epochs": 10
  },
  "test": {
    "batch_size": 128,
    "optimizer": {
      "name": "sgd",
      "lr": 0.5
    }
  },
  "default": {
    "batch_size": 32,
    "optimizer": {
      "name": "sgd",
      "lr": 0.5
    }
  },
  "data": {
    "path": "/data/train",
    "format": "parquet"
  },
  "seed": 42,
  "device": "cuda"
}
"#);
}

#[test]
fn test_snapshot_full_read_yaml() {
    let tree = create_training_tree();

    let output = dicfg_in(&tree)
        .args(FULL_READ)
        .args(["--format", "yaml"])
        .output()
        .expect("Failed to run dicfg");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout, @r#"
train:
  batch_size: 32
  optimizer:
    name: sgd
    lr: 0.5
  shuffle: true
  epochs: 10
test:
  batch_size: 128
  optimizer:
    name: sgd
    lr: 0.5
default:
  batch_size: 32
  optimizer:
    name: sgd
    lr: 0.5
data:
  path: /data/train
  format: parquet
seed: 42
device: cuda
"#);
}

#[test]
fn test_snapshot_compact_context_only() {
    let tree = create_training_tree();

    let output = dicfg_in(&tree)
        .args(["model", "-k", "eval", "--get", "eval", "--compact"])
        .output()
        .expect("Failed to run dicfg");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout, @r#"{"batch_size":32,"optimizer":{"name":"sgd","lr":0.1}}"#);
}

// ==================== Error Output Snapshots ====================

#[test]
fn test_snapshot_missing_section_error() {
    let tree = create_training_tree();

    let output = dicfg_in(&tree)
        .args(["modle", "-u", "users/alice.yml"])
        .output()
        .expect("Failed to run dicfg");

    let stderr = String::from_utf8_lossy(&output.stderr);

    insta::assert_snapshot!(stderr, @r"
Error: No section named 'modle' in user config users/alice.yml

Did you mean: 'model'?
");
}

#[test]
fn test_snapshot_missing_main_config_error() {
    let tree = create_empty_tree();

    let output = dicfg_in(&tree)
        .arg("model")
        .output()
        .expect("Failed to run dicfg");

    let stderr = String::from_utf8_lossy(&output.stderr);

    insta::assert_snapshot!(stderr, @r"
Error: No main config file found at: ./configs/config.yml

Tip: The main config path can be set with --config or `main_config_path`.
");
}
