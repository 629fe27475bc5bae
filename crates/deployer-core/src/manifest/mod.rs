//! Reading, merging, and rewriting the target project's package.json
//!
//! This module provides:
//! - The parsed manifest type with order-preserving sections
//! - The template's required dependency and script tables
//! - Merge rules for runtime dependencies, dev dependencies, and scripts

pub mod merge;
pub mod package;

pub use merge::{update_manifest, MergeDecision, MergeReport};
pub use package::Manifest;
