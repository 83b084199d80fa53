//! End-to-end tests for the `cardwall filter` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the cardwall binary
fn cardwall_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cardwall")
}

fn run_filter_json(tag: &str) -> serde_json::Value {
    let (scene_path, _temp_dir) = create_temp_scene_file(&oracle_scene_json());

    let output = Command::new(cardwall_bin())
        .args([
            "filter",
            scene_path.to_str().unwrap(),
            "--filter",
            tag,
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "filter should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Should parse JSON output")
}

#[test]
fn test_filter_settles_matching_items() {
    let report = run_filter_json("video");
    let container = &report["containers"][0];

    assert_eq!(container["visible_items"], 3);
    // Three surviving cards spread over the three columns.
    assert_eq!(container["container_height"].as_f64().unwrap(), 100.0);

    let items = container["items"].as_array().expect("items array");
    assert_eq!(items[0]["phase"], "visible-active");
    assert_eq!(items[1]["phase"], "hidden");
    assert_eq!(items[1]["height"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_filter_wildcard_keeps_everything_visible() {
    let report = run_filter_json("*");
    let container = &report["containers"][0];
    assert_eq!(container["visible_items"], 7);
    assert_eq!(container["container_height"].as_f64().unwrap(), 200.0);
}

#[test]
fn test_filter_tag_matching_nothing_empties_the_grid() {
    let report = run_filter_json("archive");
    let container = &report["containers"][0];
    assert_eq!(container["visible_items"], 0);
    assert_eq!(container["container_height"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_filter_without_matching_trigger_fails() {
    let (scene_path, _temp_dir) = create_temp_scene_file(&oracle_scene_json());

    let output = Command::new(cardwall_bin())
        .args([
            "filter",
            scene_path.to_str().unwrap(),
            "--filter",
            "sculpture",
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sculpture"),
        "error should name the missing trigger. stderr: {stderr}"
    );
}

#[test]
fn test_filter_on_layout_only_scene_fails() {
    let (scene_path, _temp_dir) = create_temp_scene_file(&layout_only_scene_json());

    let output = Command::new(cardwall_bin())
        .args(["filter", scene_path.to_str().unwrap(), "--filter", "*"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
}
