//! Reading and writing `.links.json` config files

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::schema::LinkConfig;

/// Attempt-level failures when loading or saving a config file.
///
/// All of these are recoverable: the interactive loop maps them to a status
/// line and re-prompts instead of exiting the process.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{path} does not exist or cannot be read")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} cannot be read as JSON, check it for syntax errors")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize the config for {path}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse a config file, keeping unreadable-file and invalid-JSON
/// failures distinct.
pub fn load(path: &Path) -> Result<Value, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Write a normalized config back to `path` as UTF-8 JSON with 4-space
/// indentation. serde_json leaves non-ASCII characters unescaped.
pub fn save(path: &Path, config: &LinkConfig) -> Result<(), StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Serialize {
            path: path.display().to_string(),
            source,
        })?;
    fs::write(path, buf).map_err(|source| StoreError::Write {
        path: path.display().to_string(),
        source,
    })
}
