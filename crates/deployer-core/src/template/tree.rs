//! Locating and enumerating the bundled template tree

use crate::error::DeployError;
use std::path::{Path, PathBuf};

/// Environment variable overriding the bundled template location.
pub const TEMPLATE_DIR_ENV: &str = "EXPO_MVVM_TEMPLATE_DIR";

/// TypeScript project configuration shipped next to the payload.
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Directory inside the template root holding the deployable payload.
const PAYLOAD_DIR: &str = "src";

/// The bundled template: a payload directory whose top-level entries get
/// deployed into the project, plus a sibling tsconfig.json. Read-only input.
#[derive(Debug, Clone)]
pub struct TemplateTree {
    root: PathBuf,
}

/// A top-level payload entry. Directories replace project directories
/// wholesale; files overwrite project files of the same name.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl TemplateTree {
    /// Locate the template root: an explicit override, then the environment
    /// variable, then the `template` directory next to the executable.
    pub fn locate(override_dir: Option<PathBuf>) -> Result<Self, DeployError> {
        let root = match override_dir {
            Some(dir) => dir,
            None => match std::env::var_os(TEMPLATE_DIR_ENV) {
                Some(dir) => PathBuf::from(dir),
                None => default_template_root(),
            },
        };

        let tree = Self { root };
        if !tree.payload_dir().is_dir() {
            return Err(DeployError::TemplateMissing(tree.payload_dir()));
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory whose top-level entries are deployed into the project.
    pub fn payload_dir(&self) -> PathBuf {
        self.root.join(PAYLOAD_DIR)
    }

    /// The template's tsconfig.json, when shipped.
    pub fn tsconfig_path(&self) -> Option<PathBuf> {
        let path = self.root.join(TSCONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Enumerate the payload's top-level entries, sorted by name.
    pub fn entries(&self) -> Result<Vec<TemplateEntry>, DeployError> {
        let payload = self.payload_dir();
        let read_dir =
            std::fs::read_dir(&payload).map_err(|e| DeployError::copy("read", &payload, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| DeployError::copy("read", &payload, e))?;
            let path = item.path();
            let is_dir = item
                .file_type()
                .map_err(|e| DeployError::copy("read", &path, e))?
                .is_dir();
            entries.push(TemplateEntry {
                name: item.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

fn default_template_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("template")))
        .unwrap_or_else(|| PathBuf::from("template"))
}
