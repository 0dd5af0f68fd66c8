//! Load, locate, insert and save operations for the plugin registry
//!
//! The registry is a JSON array of plugin objects whose order is meaningful.
//! Existing entries are kept as untyped [`serde_json::Value`]s so every field
//! they carry survives the round trip untouched; only the entry being added
//! is typed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::{RegistryError, Result};

/// Registry entry for a plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Unique plugin id
    pub id: String,

    /// Display name
    pub name: String,

    /// Author
    pub author: String,

    /// Short description
    pub description: String,

    /// Repository in "owner/repo" form
    pub repo: String,
}

/// Read the registry file and parse it as a JSON array.
///
/// Anything other than a top-level array is a parse error; the objects
/// inside are not validated further.
pub fn load(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), "loaded registry file");
    match parsed {
        Value::Array(entries) => Ok(entries),
        other => Err(RegistryError::Parse(format!(
            "expected a JSON array at the top level, got {}",
            type_name(&other)
        ))),
    }
}

/// Index of the first entry whose `id` field equals `anchor_id`.
///
/// Entries without a string `id` are skipped. Returns `None` after a full
/// scan with no match.
pub fn position_of(registry: &[Value], anchor_id: &str) -> Option<usize> {
    registry
        .iter()
        .position(|entry| entry.get("id").and_then(Value::as_str) == Some(anchor_id))
}

/// Insert `entry` immediately before the first entry whose `id` equals
/// `anchor_id`, shifting everything from that index onwards.
///
/// Returns the insertion index, or `None` when the anchor is absent, in
/// which case the registry is left unmodified.
pub fn insert_before(registry: &mut Vec<Value>, anchor_id: &str, entry: Value) -> Option<usize> {
    let pos = position_of(registry, anchor_id)?;
    registry.insert(pos, entry);
    debug!(anchor = anchor_id, position = pos, "inserted entry");
    Some(pos)
}

/// Serialize the full registry with 4-space indentation and overwrite the
/// file in place. Full replacement, no temp-file-and-rename.
pub fn save(path: &Path, registry: &[Value]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    registry.serialize(&mut ser)?;
    fs::write(path, &buf)?;
    debug!(path = %path.display(), entries = registry.len(), "wrote registry file");
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_position_of_finds_first_match() {
        let registry = vec![
            json!({"id": "a"}),
            json!({"id": "b"}),
            json!({"id": "b"}),
        ];
        assert_eq!(position_of(&registry, "b"), Some(1));
    }

    #[test]
    fn test_position_of_missing_anchor() {
        let registry = vec![json!({"id": "a"})];
        assert_eq!(position_of(&registry, "z"), None);
    }

    #[test]
    fn test_position_of_skips_entries_without_string_id() {
        let registry = vec![json!({"name": "no id"}), json!({"id": 7}), json!({"id": "x"})];
        assert_eq!(position_of(&registry, "x"), Some(2));
    }

    #[test]
    fn test_insert_before_shifts_later_entries() {
        let mut registry = vec![json!({"id": "a"}), json!({"id": "b"})];
        let pos = insert_before(&mut registry, "b", json!({"id": "new"}));

        assert_eq!(pos, Some(1));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry[1]["id"], "new");
        assert_eq!(registry[2]["id"], "b");
    }

    #[test]
    fn test_insert_before_missing_anchor_is_a_no_op() {
        let mut registry = vec![json!({"id": "a"})];
        let before = registry.clone();

        assert_eq!(insert_before(&mut registry, "z", json!({"id": "new"})), None);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, r#"{"id": "a"}"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_load_propagates_json_syntax_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load(&path).unwrap_err(), RegistryError::Json(_)));
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        let registry = vec![json!({"zeta": 1, "alpha": 2, "id": "a", "extra": [1, 2]})];

        save(&path, &registry).unwrap();
        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded, registry);

        // preserve_order keeps object keys in document order
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.find("zeta").unwrap() < raw.find("alpha").unwrap());
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");

        save(&path, &[json!({"id": "a"})]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n    {"));
        assert!(raw.contains("\n        \"id\": \"a\""));
    }
}
