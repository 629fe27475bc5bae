//! Error taxonomy for the deployment pipeline

use std::path::{Path, PathBuf};
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by validation, replacement, and manifest merging.
///
/// Every variant is fatal to the run: there is no retry, and file-system
/// changes already applied are not rolled back.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The target path does not exist on disk.
    #[error("Project directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The target exists but is not a valid Expo project.
    #[error("{0}")]
    InvalidProject(String),

    /// The bundled template payload could not be located.
    #[error("Template directory not found: {}. Please check your installation.", .0.display())]
    TemplateMissing(PathBuf),

    /// A file-system operation failed during replacement. The project may be
    /// left partially replaced.
    #[error("Failed to {action}: {}", path.display())]
    Copy {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// package.json could not be read or parsed.
    #[error("Failed to read package.json at {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    /// package.json could not be serialized or written back.
    #[error("Failed to write package.json at {}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: Cause,
    },
}

impl DeployError {
    pub(crate) fn copy(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Copy {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn manifest_read(path: &Path, source: impl Into<Cause>) -> Self {
        Self::ManifestRead {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn manifest_write(path: &Path, source: impl Into<Cause>) -> Self {
        Self::ManifestWrite {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
