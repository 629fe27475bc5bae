//! Template tree location, replacement, and preservation reporting
//!
//! This module provides:
//! - `TemplateTree` location and top-level entry enumeration
//! - Destructive replacement of project entries with the template payload
//! - The advisory report of preserved framework configuration files

pub mod deploy;
pub mod preserve;
pub mod tree;

pub use deploy::{copy_tsconfig_if_absent, replace_entry, ReplaceAction, TsconfigOutcome};
pub use preserve::{preservation_report, PreserveDecision, PRESERVED_CONFIG_FILES};
pub use tree::{TemplateEntry, TemplateTree, TEMPLATE_DIR_ENV, TSCONFIG_FILE};
