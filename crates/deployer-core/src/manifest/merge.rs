//! Dependency and script reconciliation against the template's requirements

use crate::error::DeployError;
use crate::manifest::package::{self, Manifest, MANIFEST_FILE};
use serde_json::{Map, Value};
use std::path::Path;

/// Runtime dependencies the template requires, pinned to known-good versions.
///
/// React Navigation is required by Expo Router internally even though the
/// template drives navigation through Expo Router's API.
pub const RUNTIME_DEPENDENCIES: &[(&str, &str)] = &[
    ("react-native-safe-area-context", "4.8.2"),
    ("react-native-screens", "~3.29.0"),
    ("@react-native-async-storage/async-storage", "~1.21.0"),
    ("expo-constants", "~15.4.5"),
    ("expo-linking", "~6.2.2"),
    ("react-native-gesture-handler", "~2.14.0"),
    ("zustand", "^4.4.1"),
    ("axios", "^1.6.0"),
    ("expo-router", "~3.4.7"),
    ("@expo/vector-icons", "^14.0.0"),
    ("expo-status-bar", "~1.11.1"),
    ("@react-navigation/drawer", "^7.1.1"),
    ("@react-navigation/native", "^7.1.1"),
    ("@react-navigation/stack", "^7.1.1"),
    ("@react-navigation/bottom-tabs", "^7.1.1"),
];

/// Development dependencies; always upgraded to the template's pinned version.
pub const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/react", "~18.2.45"),
    ("@types/react-native", "^0.73.0"),
    ("typescript", "^5.1.3"),
];

/// Runtime packages that must track the template's pinned version even when
/// the project already declares them.
pub const OVERRIDE_PACKAGES: &[&str] = &[
    "@react-navigation/native",
    "@react-navigation/bottom-tabs",
    "@react-navigation/drawer",
    "@react-navigation/stack",
];

/// Scripts inserted when absent. Existing entries are never touched.
pub const REQUIRED_SCRIPTS: &[(&str, &str)] = &[
    ("start", "expo start"),
    ("android", "expo start --android"),
    ("ios", "expo start --ios"),
    ("web", "expo start --web"),
];

/// Outcome of reconciling a single package or script entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDecision {
    /// Entry was absent and inserted at the template's version.
    Added { name: String, version: String },
    /// Entry existed and was forced to the template's version.
    Updated {
        name: String,
        version: String,
        previous: String,
    },
    /// Entry existed and the project's version was kept.
    Kept { name: String, version: String },
}

/// How an existing entry is treated when a required entry collides with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollisionPolicy {
    /// Force the template's version only for packages in `OVERRIDE_PACKAGES`.
    OverrideListed,
    /// Always force the template's version.
    OverrideAll,
    /// Never touch an existing entry.
    KeepExisting,
}

/// Decisions for all three manifest sections, in merge order.
#[derive(Debug, Default)]
pub struct MergeReport {
    pub dependencies: Vec<MergeDecision>,
    pub dev_dependencies: Vec<MergeDecision>,
    pub scripts: Vec<MergeDecision>,
}

/// Merge the template's runtime dependencies into the manifest.
/// Only packages in `OVERRIDE_PACKAGES` have an existing version replaced.
pub fn merge_dependencies(manifest: &mut Manifest) -> Vec<MergeDecision> {
    merge_section(
        manifest.section_mut("dependencies"),
        RUNTIME_DEPENDENCIES,
        CollisionPolicy::OverrideListed,
    )
}

/// Merge the template's dev dependencies; existing versions always upgrade.
pub fn merge_dev_dependencies(manifest: &mut Manifest) -> Vec<MergeDecision> {
    merge_section(
        manifest.section_mut("devDependencies"),
        DEV_DEPENDENCIES,
        CollisionPolicy::OverrideAll,
    )
}

/// Merge the template's scripts; existing commands are never overwritten.
pub fn merge_scripts(manifest: &mut Manifest) -> Vec<MergeDecision> {
    merge_section(
        manifest.section_mut("scripts"),
        REQUIRED_SCRIPTS,
        CollisionPolicy::KeepExisting,
    )
}

fn merge_section(
    section: &mut Map<String, Value>,
    required: &[(&str, &str)],
    policy: CollisionPolicy,
) -> Vec<MergeDecision> {
    let mut decisions = Vec::with_capacity(required.len());

    for (name, version) in required {
        match section.get(*name) {
            None => {
                section.insert(name.to_string(), Value::String(version.to_string()));
                decisions.push(MergeDecision::Added {
                    name: name.to_string(),
                    version: version.to_string(),
                });
            }
            Some(existing) => {
                let previous = existing.as_str().unwrap_or_default().to_string();
                let force = match policy {
                    CollisionPolicy::OverrideAll => true,
                    CollisionPolicy::OverrideListed => OVERRIDE_PACKAGES.contains(name),
                    CollisionPolicy::KeepExisting => false,
                };
                if force {
                    section.insert(name.to_string(), Value::String(version.to_string()));
                    decisions.push(MergeDecision::Updated {
                        name: name.to_string(),
                        version: version.to_string(),
                        previous,
                    });
                } else {
                    decisions.push(MergeDecision::Kept {
                        name: name.to_string(),
                        version: previous,
                    });
                }
            }
        }
    }

    decisions
}

/// Read, reconcile, and rewrite the project's package.json.
///
/// A write failure after mutation discards the in-memory state; the on-disk
/// manifest stays whatever was last successfully written.
pub async fn update_manifest(project_dir: &Path) -> Result<MergeReport, DeployError> {
    let path = project_dir.join(MANIFEST_FILE);
    let mut manifest = package::read_manifest(&path).await?;

    let report = MergeReport {
        dependencies: merge_dependencies(&mut manifest),
        dev_dependencies: merge_dev_dependencies(&mut manifest),
        scripts: merge_scripts(&mut manifest),
    };

    package::write_manifest(&path, &manifest).await?;
    Ok(report)
}
