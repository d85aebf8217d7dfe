// src/scan/patterns.rs

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{GlobBuilder, GlobMatcher};

use crate::errors::Result;

/// A configured watched (or excluded) directory spec.
///
/// Either a literal path or a pattern containing exactly one wildcard
/// segment (`.../*/...`) meaning "any one immediate subdirectory at this
/// position". Relative specs resolve against the configured site root.
///
/// Construction normalizes the raw string: surrounding whitespace and
/// trailing slashes are trimmed, and a trailing `/.` self-reference (as
/// produced by naive recursive directory iterators) is stripped before any
/// matching happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectorySpec(String);

impl DirectorySpec {
    pub fn new(raw: impl Into<String>) -> Self {
        let mut s = raw.into().trim().replace('\\', "/");
        if let Some(stripped) = s.strip_suffix("/.") {
            s = stripped.to_string();
        }
        while s.len() > 1 && s.ends_with('/') {
            s.pop();
        }
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the spec contains a wildcard segment.
    pub fn has_wildcard(&self) -> bool {
        self.0.split('/').any(|seg| seg == "*")
    }

    /// Resolve against `site_root`; absolute specs are taken as-is.
    pub fn resolve(&self, site_root: &Path) -> PathBuf {
        let path = Path::new(&self.0);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            site_root.join(path)
        }
    }
}

impl fmt::Display for DirectorySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DirectorySpec {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DirectorySpec {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Compiled matcher derived from a wildcard spec.
///
/// Built with `literal_separator(true)` so the `*` segment matches exactly
/// one path component and never crosses a `/`; everything around the
/// wildcard must match literally. Lives only for the duration of one
/// expansion call.
pub struct CompiledPattern {
    matcher: GlobMatcher,
}

impl CompiledPattern {
    /// Compile a matcher from the full (resolved) spec string.
    pub fn compile(spec: &str) -> Result<Self> {
        let glob = GlobBuilder::new(spec)
            .literal_separator(true)
            .build()
            .with_context(|| format!("compiling directory pattern '{spec}'"))?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// Decide membership for a candidate path (forward slashes).
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = candidate.strip_suffix("/.").unwrap_or(candidate);
        self.matcher.is_match(candidate)
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("glob", &self.matcher.glob().glob())
            .finish()
    }
}
