//! Deployer Core - Shared library for the Expo MVVM template CLI
//!
//! This library applies a bundled MVVM template to an existing Expo project:
//! it validates the target, replaces its top-level directories and files with
//! the template payload, and reconciles the project's `package.json` against
//! the template's required dependencies and scripts.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template tree location/enumeration,
//!   project validation, directory replacement, and manifest merging. Merge
//!   and classification logic is pure and unit-testable without a disk.
//! - **Layer 2: CLI Interface** - Optional cliclack-based flow (feature-gated)
//!   that runs validation, replacement, and manifest merging in order with
//!   step-by-step progress output.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based CLI flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use deployer_core::{project, template, manifest};
//!
//! let dir = project::resolve_project_dir("MyApp");
//! project::validate(&dir).await?;
//!
//! let tree = template::TemplateTree::locate(None)?;
//! for entry in tree.entries()? {
//!     template::deploy::replace_entry(&entry, &dir).await?;
//! }
//!
//! let report = manifest::update_manifest(&dir).await?;
//! ```

pub mod error;
pub mod manifest;
pub mod project;
pub mod template;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::DeployError;
pub use manifest::{update_manifest, Manifest, MergeDecision, MergeReport};
pub use template::{TemplateEntry, TemplateTree};

#[cfg(feature = "tui")]
pub use tui::{run, DeployArgs};
