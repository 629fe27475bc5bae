//! Advisory report of framework configuration files affected by deployment
//!
//! Report-only: by the time this runs, the replacement pass has already
//! decided winners for every top-level file. Nothing here touches the disk
//! beyond existence checks; package.json reconciliation happens separately
//! in the manifest merge.

use crate::template::tree::TemplateTree;
use std::path::Path;

/// Expo configuration files called out in the deployment report.
pub const PRESERVED_CONFIG_FILES: &[&str] =
    &["app.json", "babel.config.js", "index.js", "metro.config.js"];

/// How a watched configuration file fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreserveDecision {
    /// The project has the file and the template does not ship it.
    ProjectKept(String),
    /// Both sides have the file; the replacement pass took the template's.
    TemplateWins(String),
}

/// Classify one watched file by where it exists.
pub fn classify(name: &str, in_template: bool, in_project: bool) -> Option<PreserveDecision> {
    match (in_template, in_project) {
        (false, true) => Some(PreserveDecision::ProjectKept(name.to_string())),
        (true, true) => Some(PreserveDecision::TemplateWins(name.to_string())),
        _ => None,
    }
}

/// Build the advisory report for all watched configuration files.
pub fn preservation_report(tree: &TemplateTree, project_dir: &Path) -> Vec<PreserveDecision> {
    PRESERVED_CONFIG_FILES
        .iter()
        .filter_map(|name| {
            let in_template = tree.payload_dir().join(name).exists();
            let in_project = project_dir.join(name).exists();
            classify(name, in_template, in_project)
        })
        .collect()
}
