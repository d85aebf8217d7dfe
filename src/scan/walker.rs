// src/scan/walker.rs

//! Recursive enumeration of candidate files under one resolved root.
//!
//! The walker applies the skip filters (hidden entries, recycler contents,
//! excluded subtrees) and classifies surviving files by extension. It does
//! *not* decide whether a file actually needs resizing; that is the resize
//! collaborator's contract.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::errors::{ResizewalkError, Result};

/// A filesystem entry that survived all skip filters.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Containing directory.
    pub parent: PathBuf,
    /// Base name of the file.
    pub name: String,
    /// Extension, lowercased.
    pub extension: String,
}

/// Walks a single resolved root and yields qualifying files.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    exclusions: Vec<PathBuf>,
    recycler: String,
    extensions: HashSet<String>,
}

impl TreeWalker {
    /// `exclusions` must already be resolved to absolute paths (the same way
    /// the roots were). `extensions` are lowercased on the way in.
    pub fn new(
        exclusions: Vec<PathBuf>,
        recycler: impl Into<String>,
        extensions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            exclusions,
            recycler: recycler.into(),
            extensions: extensions.into_iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Recursively enumerate files under `root`, invoking `dispatch` for
    /// every candidate.
    ///
    /// A missing root is a configuration error worth surfacing
    /// ([`ResizewalkError::RootNotFound`]) rather than a silent skip:
    /// literal roots, unlike wildcard specs, are not speculative.
    ///
    /// Traversal order is sorted by file name, so the dispatch sequence is
    /// stable for a given filesystem state.
    pub fn walk(&self, root: &Path, mut dispatch: impl FnMut(&FileCandidate)) -> Result<()> {
        if !root.is_dir() {
            return Err(ResizewalkError::RootNotFound(root.to_path_buf()));
        }

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(root = %root.display(), error = %err, "walk error, entry skipped");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(candidate) = self.classify(entry.path()) {
                dispatch(&candidate);
            }
        }

        Ok(())
    }

    /// Apply the skip filters to one visited file; `None` means skip.
    fn classify(&self, path: &Path) -> Option<FileCandidate> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let parent = path.parent()?.to_path_buf();

        // Hidden entries are never dispatched, regardless of extension.
        if name.starts_with('.') {
            trace!(file = %path.display(), "skipping hidden entry");
            return None;
        }

        // Anything at or below a recycler-named directory is trash.
        if parent
            .components()
            .any(|c| c.as_os_str() == self.recycler.as_str())
        {
            trace!(file = %path.display(), "skipping recycler entry");
            return None;
        }

        // Excluded subtrees: component-wise prefix match, equality included.
        if let Some(rule) = self.exclusions.iter().find(|ex| parent.starts_with(ex)) {
            trace!(file = %path.display(), rule = %rule.display(), "skipping excluded entry");
            return None;
        }

        // Extension: substring after the last '.', lowercased. A name
        // without a dot is never dispatched.
        let (_, extension) = name.rsplit_once('.')?;
        let extension = extension.to_lowercase();
        if !self.extensions.contains(&extension) {
            return None;
        }

        Some(FileCandidate {
            path: path.to_path_buf(),
            parent,
            name,
            extension,
        })
    }
}
