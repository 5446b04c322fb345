//! Typed schema for `.links.json` shortcut configuration files

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema version this tool writes by default.
pub const CURRENT_VERSION: i64 = 3;

/// Required suffix for shortcut link config files.
pub const LINKS_SUFFIX: &str = ".links.json";

/// A fully normalized shortcut link configuration.
///
/// Field order matters: it is the order the fields are serialized in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub version: i64,
    /// Declared tags, insertion order preserved. Copied verbatim from the
    /// source file: elements are not validated or deduplicated.
    pub tags: Vec<Value>,
    pub program_links: Vec<ProgramLink>,
}

/// One launchable program entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramLink {
    /// Display name parts; a scalar source value is wrapped as one part.
    pub name: Vec<Value>,
    /// Copied verbatim, no type coercion; defaults to `""`.
    pub icon_path: Value,
    /// Copied verbatim, no type coercion; defaults to `""`.
    pub run_command: Value,
    /// Subset of the top-level tag list, source order preserved.
    pub tags: Vec<Value>,
    /// Stable identifier; generated when the source has none.
    pub uuid: String,
}

/// Whether a candidate path names a shortcut link config file.
pub fn is_links_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(LINKS_SUFFIX)
}
