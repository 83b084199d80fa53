//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cardwall::Scene;

/// Scene JSON exercising the reference balancing oracle: seven items across
/// three desktop columns, with video/branding/print categories and a full
/// filter trigger set.
pub fn oracle_scene_json() -> String {
    serde_json::json!({
        "viewport_width": 1024.0,
        "containers": [{
            "breakpoints": { "desktop": 3 },
            "filters": ["*", "video", "branding", "print", "archive"],
            "items": [
                { "height": 100.0, "categories": ["video"] },
                { "height": 50.0,  "categories": ["branding"] },
                { "height": 80.0,  "categories": ["video"] },
                { "height": 30.0,  "categories": ["print"] },
                { "height": 120.0, "categories": ["branding"] },
                { "height": 40.0,  "categories": ["video"] },
                { "height": 60.0,  "categories": ["print"] }
            ]
        }]
    })
    .to_string()
}

/// A layout-only scene: one container without filter triggers.
pub fn layout_only_scene_json() -> String {
    serde_json::json!({
        "viewport_width": 600.0,
        "containers": [{
            "items": [
                { "height": 100.0 },
                { "height": 50.0 },
                { "height": 80.0 }
            ]
        }]
    })
    .to_string()
}

/// Parses a fixture JSON string into a `Scene`.
pub fn scene_from_json(json: &str) -> Scene {
    serde_json::from_str(json).expect("fixture scene should parse")
}

/// Writes scene JSON to a temp file; the `TempDir` keeps it alive.
pub fn create_temp_scene_file(json: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scene.json");
    fs::write(&path, json).expect("Failed to write scene file");
    (path, dir)
}
