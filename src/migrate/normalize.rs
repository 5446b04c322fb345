//! Field-by-field normalization of raw link configs
//!
//! Every field is handled independently: a missing or malformed field is
//! replaced with its default and reported as a diagnostic, and normalization
//! never aborts over a single bad field. The two hard failures (unreadable
//! file, invalid JSON) live in [`super::store`]; by the time a value reaches
//! this module it is already parsed.

use serde_json::Value;
use uuid::Uuid;

use super::schema::{LinkConfig, ProgramLink};

/// Outcome of normalizing one raw config.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub config: LinkConfig,
    /// False when the raw input is already structurally identical to the
    /// normalized config, meaning no write is needed.
    pub changed: bool,
    /// Human-readable messages, one per field that was missing or malformed.
    pub diagnostics: Vec<String>,
    pub stats: NormalizeStats,
}

/// Counters for the migration summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Fields that were absent or malformed and got their default.
    pub defaults_filled: usize,
    /// Links that received a freshly generated identifier.
    pub uuids_generated: usize,
    /// Per-link tags dropped for not being declared at the top level.
    pub tags_dropped: usize,
}

/// Normalize a parsed config to the `current_version` schema.
pub fn normalize(raw: &Value, current_version: i64) -> Normalized {
    let mut diagnostics = Vec::new();
    let mut stats = NormalizeStats::default();

    let before = diagnostics.len();
    let version = normalize_version(raw.get("version"), current_version, &mut diagnostics);
    // Every version diagnostic means the stored value was substituted.
    stats.defaults_filled += diagnostics.len() - before;

    let tags = match raw.get("tags") {
        None | Some(Value::Null) => {
            diagnostics.push("no tags found, starting with an empty tag list".to_string());
            stats.defaults_filled += 1;
            Vec::new()
        }
        Some(Value::Array(tags)) => tags.clone(),
        Some(_) => {
            diagnostics.push("tags is not a list, starting with an empty tag list".to_string());
            stats.defaults_filled += 1;
            Vec::new()
        }
    };

    let program_links = match raw.get("program_links") {
        None | Some(Value::Null) => {
            diagnostics.push("no links found, starting with an empty link list".to_string());
            stats.defaults_filled += 1;
            Vec::new()
        }
        Some(Value::Array(links)) => links
            .iter()
            .enumerate()
            .map(|(i, link)| normalize_link(link, i + 1, &tags, &mut diagnostics, &mut stats))
            .collect(),
        Some(_) => {
            diagnostics.push("links are not a list, starting with an empty link list".to_string());
            stats.defaults_filled += 1;
            Vec::new()
        }
    };

    let config = LinkConfig {
        version,
        tags,
        program_links,
    };

    let changed = serde_json::to_value(&config)
        .map(|normalized| normalized != *raw)
        .unwrap_or(true);

    if !changed {
        diagnostics.push("config already matches the current schema, no update needed".to_string());
    }

    Normalized {
        config,
        changed,
        diagnostics,
        stats,
    }
}

fn normalize_version(raw: Option<&Value>, current: i64, diagnostics: &mut Vec<String>) -> i64 {
    // Falsy values (null, 0, "") count the same as a missing field, matching
    // configs written before versioning existed.
    let value = match raw {
        None => None,
        Some(value) if is_falsy(value) => None,
        Some(value) => Some(value),
    };
    let Some(value) = value else {
        diagnostics.push(format!("no version found, using version {current}"));
        return current;
    };

    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        None => {
            diagnostics.push(format!(
                "version {value} is not a valid integer, using version {current}"
            ));
            current
        }
        Some(version) if version < current => {
            diagnostics.push(format!(
                "version {version} is older than the current version, using version {current}"
            ));
            current
        }
        Some(version) => version,
    }
}

/// Normalize one link entry. `index` is 1-based and only used in diagnostics.
fn normalize_link(
    raw: &Value,
    index: usize,
    top_tags: &[Value],
    diagnostics: &mut Vec<String>,
    stats: &mut NormalizeStats,
) -> ProgramLink {
    let name = match raw.get("name") {
        None | Some(Value::Null) => {
            diagnostics.push(format!("link {index} has no name, using an empty name"));
            stats.defaults_filled += 1;
            Vec::new()
        }
        Some(Value::Array(parts)) => parts.clone(),
        Some(scalar) => vec![Value::String(stringify(scalar))],
    };

    let icon_path = match raw.get("icon_path") {
        None | Some(Value::Null) => {
            diagnostics.push(format!(
                "link {index} has no icon path, using an empty icon path"
            ));
            stats.defaults_filled += 1;
            Value::String(String::new())
        }
        Some(value) => value.clone(),
    };

    let run_command = match raw.get("run_command") {
        None | Some(Value::Null) => {
            diagnostics.push(format!(
                "link {index} has no run command, using an empty run command"
            ));
            stats.defaults_filled += 1;
            Value::String(String::new())
        }
        Some(value) => value.clone(),
    };

    let tags = match raw.get("tags") {
        None | Some(Value::Null) => {
            diagnostics.push(format!("link {index} has no tags, using an empty tag list"));
            stats.defaults_filled += 1;
            Vec::new()
        }
        Some(Value::Array(entries)) => {
            // Membership is checked against the already-normalized top-level
            // tag list; undeclared tags are dropped without a diagnostic.
            let kept: Vec<Value> = entries
                .iter()
                .filter(|tag| top_tags.contains(tag))
                .cloned()
                .collect();
            stats.tags_dropped += entries.len() - kept.len();
            kept
        }
        Some(_) => {
            diagnostics.push(format!("link {index} has no tags, using an empty tag list"));
            stats.defaults_filled += 1;
            Vec::new()
        }
    };

    let uuid = match raw.get("uuid") {
        None => None,
        Some(value) if is_falsy(value) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(stringify(other)),
    };
    let uuid = match uuid {
        Some(uuid) => uuid,
        None => {
            diagnostics.push(format!("link {index} has no uuid, generating a random one"));
            stats.uuids_generated += 1;
            Uuid::new_v4().to_string()
        }
    };

    ProgramLink {
        name,
        icon_path,
        run_command,
        tags,
        uuid,
    }
}

/// Truthiness rules the old config writer relied on: null, false, zero, and
/// empty strings, arrays, and objects all count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Render a scalar the way a user wrote it: strings without JSON quotes,
/// everything else as its JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
