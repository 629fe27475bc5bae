//! Parsed package.json and its on-disk representation

use crate::error::DeployError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Manifest file name at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// The parsed package.json.
///
/// Key order is preserved through a read, merge, write round trip; keys the
/// merge inserts are appended at the end of their section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// True when `dependencies` declares the named package.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.section("dependencies")
            .is_some_and(|deps| deps.contains_key(name))
    }

    /// Immutable view of a top-level object section, if present.
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Mutable view of a top-level object section, created when absent.
    /// A non-object value under `key` is discarded and replaced.
    pub fn section_mut(&mut self, key: &str) -> &mut Map<String, Value> {
        let slot = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }
}

/// Read and parse the manifest at `path`.
pub async fn read_manifest(path: &Path) -> Result<Manifest, DeployError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| DeployError::manifest_read(path, e))?;
    serde_json::from_str(&raw).map_err(|e| DeployError::manifest_read(path, e))
}

/// Serialize the manifest back to `path` with 2-space indentation and a
/// trailing newline.
pub async fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), DeployError> {
    let mut serialized = serde_json::to_string_pretty(manifest)
        .map_err(|e| DeployError::manifest_write(path, e))?;
    serialized.push('\n');
    fs::write(path, serialized)
        .await
        .map_err(|e| DeployError::manifest_write(path, e))
}
