// src/resizer/mod.rs

//! The external resize collaborator seam.
//!
//! The batch coordinator talks to a [`Resizer`] instead of a concrete
//! implementation. This makes it easy to swap in a fake resizer in tests
//! while keeping the production command-backed implementation in
//! [`command`].
//!
//! - [`command::CommandResizer`] is the default implementation used by the
//!   `resizewalk` binary. It shells out to the configured resize command
//!   once per dispatched file.
//! - Tests can provide their own `Resizer` that records which files were
//!   dispatched without touching any image.

use std::path::{Path, PathBuf};

use crate::config::ResizerSection;
use crate::errors::Result;
use crate::notify::Notifier;
use crate::scan::DirectorySpec;

pub mod command;

pub use command::CommandResizer;

/// Optional overrides for where a processed file ends up.
///
/// Batch runs always pass [`FileTarget::unchanged`]: the collaborator
/// decides in-place naming itself.
#[derive(Debug, Clone, Default)]
pub struct FileTarget {
    pub name: Option<String>,
    pub directory: Option<PathBuf>,
    pub rule_override: Option<String>,
}

impl FileTarget {
    pub fn unchanged() -> Self {
        Self::default()
    }
}

/// The user on whose behalf a file is processed.
///
/// Batch runs always pass the anonymous context: per-user rule sets apply
/// when a file is uploaded, not during scheduled reprocessing. By then it
/// is simply too late to know who uploaded it.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub username: Option<String>,
}

impl UserContext {
    pub fn batch() -> Self {
        Self::default()
    }
}

/// Contract of the external image-resize collaborator.
///
/// The scan core only ever consumes the derived file-type and directory
/// lists and hands over candidate paths; whether a file actually needs
/// resizing (size or dimension thresholds) is the implementation's own
/// business.
pub trait Resizer {
    /// Prime the collaborator from caller-supplied configuration. Called
    /// once at run start, before any traversal.
    fn initialize_rulesets(&mut self, cfg: &ResizerSection) -> Result<()>;

    /// Recognized file extensions (compared case-insensitively).
    fn all_file_types(&self) -> Vec<String>;

    /// Directory specs known to the resize rulesets, in declaration order.
    /// Used as the watched-spec fallback when none are configured.
    fn all_directories(&self) -> Vec<DirectorySpec>;

    /// Process one candidate file, reporting the outcome through `notifier`.
    fn process_file(
        &mut self,
        path: &Path,
        target: &FileTarget,
        user: &UserContext,
        notifier: &mut dyn Notifier,
    ) -> Result<()>;
}
