// src/scan/mod.rs

//! Directory resolution and traversal.
//!
//! This module is responsible for:
//! - Compiling watched directory specs and their wildcard patterns.
//! - Expanding wildcard specs against the real filesystem.
//! - Removing overlapping roots so no subtree is scanned twice.
//! - Walking each surviving root with exclusion / hidden / recycler /
//!   extension filters.
//!
//! It does **not** know about the resize collaborator or notification
//! channels; it only turns configured specs into dispatched file candidates.

pub mod dedup;
pub mod expand;
pub mod path_utils;
pub mod patterns;
pub mod walker;

pub use dedup::dedup_roots;
pub use expand::expand;
pub use patterns::{CompiledPattern, DirectorySpec};
pub use walker::{FileCandidate, TreeWalker};
