//! Charm-style CLI flow: validate, replace, merge manifest

use crate::manifest::merge::{self, MergeDecision};
use crate::project;
use crate::template::deploy::{self, ReplaceAction, TsconfigOutcome};
use crate::template::preserve::{self, PreserveDecision};
use crate::template::tree::{TemplateEntry, TemplateTree};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for a deployment run.
#[derive(Debug, Clone, Default)]
pub struct DeployArgs {
    /// Project directory name, or "." for the current directory.
    pub project: String,

    /// Local directory to use for the template instead of the bundled one.
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm the destructive replacement prompt (non-interactive mode).
    pub yes: bool,
}

/// Run the full deployment: validation, then structure replacement, then
/// manifest merging. Any failure aborts the remaining steps; changes already
/// applied are not rolled back.
pub async fn run(args: DeployArgs) -> Result<()> {
    cliclack::intro("Expo MVVM template")?;

    // Step 1: Resolve and validate the target (read-only)
    let project_dir = project::resolve_project_dir(&args.project);
    cliclack::log::info(format!("Applying template to {}", project_dir.display()))?;

    project::validate(&project_dir).await?;
    cliclack::log::success("Valid Expo project detected")?;

    // Step 2: Locate the bundled template
    let tree = TemplateTree::locate(args.template_dir.clone())?;
    if args.template_dir.is_some() {
        cliclack::log::info(format!("Using template from {}", tree.root().display()))?;
    }
    let entries = tree.entries()?;

    confirm_replacement(&entries, &project_dir, args.yes)?;

    // Step 3: Replace the project structure (destructive)
    replace_structure(&tree, &entries, &project_dir).await?;

    // Step 4: Merge required dependencies and scripts into package.json
    update_manifest(&project_dir).await?;

    // Step 5: Show next steps
    print_next_steps(&project_dir);
    cliclack::outro("Expo MVVM template applied!")?;

    Ok(())
}

/// Warn about the directories the replacement pass will delete and ask for
/// confirmation, unless `--yes` was given.
fn confirm_replacement(entries: &[TemplateEntry], project_dir: &Path, yes: bool) -> Result<()> {
    let colliding: Vec<&str> = entries
        .iter()
        .filter(|e| e.is_dir && project_dir.join(&e.name).exists())
        .map(|e| e.name.as_str())
        .collect();

    if colliding.is_empty() {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "Existing directories will be replaced: {}",
        colliding.join(", ")
    ))?;

    let confirm = if yes {
        true
    } else {
        cliclack::confirm("Continue anyway?")
            .initial_value(true)
            .interact()?
    };

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }
    Ok(())
}

async fn replace_structure(
    tree: &TemplateTree,
    entries: &[TemplateEntry],
    project_dir: &Path,
) -> Result<()> {
    match deploy::copy_tsconfig_if_absent(tree, project_dir).await? {
        TsconfigOutcome::Copied => {
            cliclack::log::success("Copied tsconfig.json with TypeScript configuration")?
        }
        TsconfigOutcome::PreservedExisting => {
            cliclack::log::info("Preserving existing tsconfig.json")?
        }
        TsconfigOutcome::NotInTemplate => cliclack::log::warning(
            "tsconfig.json not found in template - TypeScript support may be limited",
        )?,
    }

    for entry in entries {
        match deploy::replace_entry(entry, project_dir).await? {
            ReplaceAction::ReplacedDirectory => {
                cliclack::log::info(format!("Replaced: {}", entry.name))?
            }
            ReplaceAction::CopiedDirectory => {
                cliclack::log::info(format!("Copied: {}", entry.name))?
            }
            ReplaceAction::CopiedFile => {
                cliclack::log::info(format!("Copied file: {}", entry.name))?
            }
        }
    }

    for decision in preserve::preservation_report(tree, project_dir) {
        match decision {
            PreserveDecision::ProjectKept(name) => {
                cliclack::log::info(format!("Preserving project: {name}"))?
            }
            PreserveDecision::TemplateWins(name) => cliclack::log::warning(format!(
                "Both template and project have: {name} (template wins)"
            ))?,
        }
    }

    cliclack::log::success("Project structure replaced")?;
    Ok(())
}

async fn update_manifest(project_dir: &Path) -> Result<()> {
    let report = merge::update_manifest(project_dir).await?;

    log_merge_decisions("dependency", &report.dependencies)?;
    log_merge_decisions("devDependency", &report.dev_dependencies)?;
    log_merge_decisions("script", &report.scripts)?;

    cliclack::log::success("package.json updated")?;
    Ok(())
}

fn log_merge_decisions(kind: &str, decisions: &[MergeDecision]) -> Result<()> {
    for decision in decisions {
        match decision {
            MergeDecision::Added { name, version } => {
                cliclack::log::success(format!("Added {kind}: {name}@{version}"))?
            }
            MergeDecision::Updated {
                name,
                version,
                previous,
            } => cliclack::log::info(format!("Updated {kind}: {name}@{version} (was {previous})"))?,
            MergeDecision::Kept { name, version } => {
                cliclack::log::info(format!("Kept {kind}: {name}@{version}"))?
            }
        }
    }
    Ok(())
}

fn print_next_steps(project_dir: &Path) {
    let mut steps = Vec::new();
    if std::env::current_dir().ok().as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }
    steps.push("npm install".to_string());
    steps.push("npm start".to_string());

    println!();
    println!("  {}", "Next steps".bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
}
