//! Target project resolution and validation

use crate::error::DeployError;
use crate::manifest::package::{self, MANIFEST_FILE};
use std::path::{Path, PathBuf};

/// Dependency whose presence in the manifest marks a valid deployment target.
pub const HOST_FRAMEWORK: &str = "expo";

/// Resolve the CLI's project argument to an absolute-ish path.
/// `"."` means the current directory; relative names are joined to it.
pub fn resolve_project_dir(name: &str) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if name == "." {
        return current_dir;
    }

    let path = PathBuf::from(name);
    if path.is_absolute() {
        path
    } else {
        current_dir.join(path)
    }
}

/// Check that `project_dir` is an existing Expo project.
///
/// Read-only: validation completes fully before any destructive step runs.
pub async fn validate(project_dir: &Path) -> Result<(), DeployError> {
    if !project_dir.exists() {
        return Err(DeployError::DirectoryNotFound(project_dir.to_path_buf()));
    }

    let manifest_path = project_dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Err(DeployError::InvalidProject(
            "Not a valid project. package.json not found.".to_string(),
        ));
    }

    let manifest = package::read_manifest(&manifest_path).await?;
    if !manifest.has_dependency(HOST_FRAMEWORK) {
        return Err(DeployError::InvalidProject(
            "Not a valid Expo project. Expo dependency not found.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dot_is_current_dir() {
        let resolved = resolve_project_dir(".");
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_relative_name_joins_current_dir() {
        let resolved = resolve_project_dir("MyApp");
        assert_eq!(resolved, std::env::current_dir().unwrap().join("MyApp"));
    }

    #[tokio::test]
    async fn test_validate_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = validate(&missing).await.unwrap_err();
        assert!(matches!(err, DeployError::DirectoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_validate_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();

        let err = validate(dir.path()).await.unwrap_err();
        assert!(matches!(err, DeployError::InvalidProject(_)));
    }

    #[tokio::test]
    async fn test_validate_missing_host_dependency() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{ "dependencies": { "react": "18.2.0" } }"#,
        )
        .unwrap();

        let err = validate(dir.path()).await.unwrap_err();
        assert!(matches!(err, DeployError::InvalidProject(_)));
    }

    #[tokio::test]
    async fn test_validate_unparseable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "not json").unwrap();

        let err = validate(dir.path()).await.unwrap_err();
        assert!(matches!(err, DeployError::ManifestRead { .. }));
    }

    #[tokio::test]
    async fn test_validate_expo_project() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{ "dependencies": { "expo": "~50.0.0" } }"#,
        )
        .unwrap();

        assert!(validate(dir.path()).await.is_ok());
    }
}
