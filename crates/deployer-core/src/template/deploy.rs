//! Destructive replacement of project entries with the template payload

use crate::error::DeployError;
use crate::template::tree::{TemplateEntry, TemplateTree, TSCONFIG_FILE};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Outcome of the tsconfig.json pre-step. This is the one file where the
/// target wins: an existing project tsconfig.json is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsconfigOutcome {
    /// The template ships one and the project had none; it was copied in.
    Copied,
    /// The project already has one; it was left untouched.
    PreservedExisting,
    /// The template does not ship one.
    NotInTemplate,
}

/// Copy the template's tsconfig.json into the project unless the project
/// already has one.
pub async fn copy_tsconfig_if_absent(
    tree: &TemplateTree,
    project_dir: &Path,
) -> Result<TsconfigOutcome, DeployError> {
    let Some(source) = tree.tsconfig_path() else {
        return Ok(TsconfigOutcome::NotInTemplate);
    };

    let target = project_dir.join(TSCONFIG_FILE);
    if target.exists() {
        return Ok(TsconfigOutcome::PreservedExisting);
    }

    fs::copy(&source, &target)
        .await
        .map_err(|e| DeployError::copy("copy", &target, e))?;
    Ok(TsconfigOutcome::Copied)
}

/// What `replace_entry` did to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceAction {
    /// An existing directory was deleted before the template directory was
    /// copied in its place.
    ReplacedDirectory,
    /// Directory copied fresh; nothing to delete.
    CopiedDirectory,
    /// File copied, overwriting any previous one.
    CopiedFile,
}

/// Deploy one top-level template entry into the project. Directories are
/// replaced wholesale (existing contents removed first); files overwrite
/// unconditionally.
///
/// Not transactional: a failure partway leaves the project in a mixed state.
pub async fn replace_entry(
    entry: &TemplateEntry,
    project_dir: &Path,
) -> Result<ReplaceAction, DeployError> {
    let target = project_dir.join(&entry.name);

    if entry.is_dir {
        let existed = target.exists();
        if existed {
            fs::remove_dir_all(&target)
                .await
                .map_err(|e| DeployError::copy("remove", &target, e))?;
        }
        copy_dir_recursive(&entry.path, &target).await?;
        if existed {
            Ok(ReplaceAction::ReplacedDirectory)
        } else {
            Ok(ReplaceAction::CopiedDirectory)
        }
    } else {
        fs::copy(&entry.path, &target)
            .await
            .map_err(|e| DeployError::copy("copy", &target, e))?;
        Ok(ReplaceAction::CopiedFile)
    }
}

/// Copy a directory tree, creating parent directories as needed.
async fn copy_dir_recursive(source: &Path, target: &Path) -> Result<(), DeployError> {
    for item in WalkDir::new(source) {
        let item = item.map_err(|e| DeployError::copy("read", source, e.into()))?;
        let Ok(relative) = item.path().strip_prefix(source) else {
            continue;
        };
        let dest = target.join(relative);

        if item.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .await
                .map_err(|e| DeployError::copy("create directory", &dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DeployError::copy("create directory", parent, e))?;
            }
            fs::copy(item.path(), &dest)
                .await
                .map_err(|e| DeployError::copy("copy", &dest, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn template_with(files: &[(&str, &str)]) -> (TempDir, TemplateTree) {
        let dir = tempfile::tempdir().unwrap();
        let payload = dir.path().join("src");
        for (path, content) in files {
            let full = payload.join(path);
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            std::fs::write(full, content).unwrap();
        }
        std::fs::create_dir_all(&payload).unwrap();
        let tree = TemplateTree::locate(Some(dir.path().to_path_buf())).unwrap();
        (dir, tree)
    }

    #[tokio::test]
    async fn test_directory_replaced_wholesale() {
        let (_guard, tree) = template_with(&[("store/index.ts", "export {};")]);
        let project = tempfile::tempdir().unwrap();
        let existing = project.path().join("store");
        std::fs::create_dir_all(&existing).unwrap();
        std::fs::write(existing.join("stale.ts"), "old").unwrap();

        let entries = tree.entries().unwrap();
        let action = replace_entry(&entries[0], project.path()).await.unwrap();

        assert_eq!(action, ReplaceAction::ReplacedDirectory);
        assert!(!existing.join("stale.ts").exists());
        assert_eq!(
            std::fs::read_to_string(existing.join("index.ts")).unwrap(),
            "export {};"
        );
    }

    #[tokio::test]
    async fn test_nested_directories_copied() {
        let (_guard, tree) = template_with(&[
            ("app/(drawer)/(tabs)/home/index.tsx", "home"),
            ("app/login/index.tsx", "login"),
        ]);
        let project = tempfile::tempdir().unwrap();

        let entries = tree.entries().unwrap();
        let action = replace_entry(&entries[0], project.path()).await.unwrap();

        assert_eq!(action, ReplaceAction::CopiedDirectory);
        assert!(project
            .path()
            .join("app/(drawer)/(tabs)/home/index.tsx")
            .exists());
        assert!(project.path().join("app/login/index.tsx").exists());
    }

    #[tokio::test]
    async fn test_top_level_file_overwritten() {
        let (_guard, tree) = template_with(&[("App.tsx", "template version")]);
        let project = tempfile::tempdir().unwrap();
        std::fs::write(project.path().join("App.tsx"), "project version").unwrap();

        let entries = tree.entries().unwrap();
        let action = replace_entry(&entries[0], project.path()).await.unwrap();

        assert_eq!(action, ReplaceAction::CopiedFile);
        assert_eq!(
            std::fs::read_to_string(project.path().join("App.tsx")).unwrap(),
            "template version"
        );
    }

    #[tokio::test]
    async fn test_replace_is_idempotent() {
        let (_guard, tree) = template_with(&[("store/index.ts", "export {};")]);
        let project = tempfile::tempdir().unwrap();

        let entries = tree.entries().unwrap();
        replace_entry(&entries[0], project.path()).await.unwrap();
        // Second run deletes the freshly copied directory and recreates it
        let action = replace_entry(&entries[0], project.path()).await.unwrap();

        assert_eq!(action, ReplaceAction::ReplacedDirectory);
        assert_eq!(
            std::fs::read_to_string(project.path().join("store/index.ts")).unwrap(),
            "export {};"
        );
    }

    #[tokio::test]
    async fn test_tsconfig_copied_when_absent() {
        let (guard, tree) = template_with(&[]);
        std::fs::write(guard.path().join(TSCONFIG_FILE), "{ \"strict\": true }").unwrap();
        let project = tempfile::tempdir().unwrap();

        let outcome = copy_tsconfig_if_absent(&tree, project.path()).await.unwrap();

        assert_eq!(outcome, TsconfigOutcome::Copied);
        assert!(project.path().join(TSCONFIG_FILE).exists());
    }

    #[tokio::test]
    async fn test_existing_tsconfig_wins() {
        let (guard, tree) = template_with(&[]);
        std::fs::write(guard.path().join(TSCONFIG_FILE), "{ \"strict\": true }").unwrap();
        let project = tempfile::tempdir().unwrap();
        std::fs::write(project.path().join(TSCONFIG_FILE), "{ \"mine\": true }").unwrap();

        let outcome = copy_tsconfig_if_absent(&tree, project.path()).await.unwrap();

        assert_eq!(outcome, TsconfigOutcome::PreservedExisting);
        assert_eq!(
            std::fs::read_to_string(project.path().join(TSCONFIG_FILE)).unwrap(),
            "{ \"mine\": true }"
        );
    }

    #[tokio::test]
    async fn test_tsconfig_not_in_template() {
        let (_guard, tree) = template_with(&[]);
        let project = tempfile::tempdir().unwrap();

        let outcome = copy_tsconfig_if_absent(&tree, project.path()).await.unwrap();
        assert_eq!(outcome, TsconfigOutcome::NotInTemplate);
    }
}
