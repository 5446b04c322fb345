//! Shared test utilities and fixture builders

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// A schema-complete config that normalization should leave untouched.
#[allow(dead_code)]
pub fn schema_complete_config() -> Value {
    json!({
        "version": 3,
        "tags": ["games", "tools"],
        "program_links": [
            {
                "name": ["Terminal"],
                "icon_path": "icons/term.png",
                "run_command": "wt.exe",
                "tags": ["tools"],
                "uuid": "7a6f3c4e-0b5d-4f7e-9a1b-2c3d4e5f6a7b"
            }
        ]
    })
}

/// A legacy config exercising most of the default-filling paths:
/// old version, scalar name, missing icon/command fields, an undeclared
/// per-link tag, and missing or empty uuids.
#[allow(dead_code)]
pub fn legacy_config() -> Value {
    json!({
        "version": 1,
        "tags": ["games"],
        "program_links": [
            { "name": "Doom", "tags": ["games", "retro"] },
            { "icon_path": "icons/edit.png", "uuid": "" }
        ]
    })
}

/// Write `contents` into a fresh temp dir as `test.links.json`.
#[allow(dead_code)]
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.links.json");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
