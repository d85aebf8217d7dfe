// src/scan/expand.rs

//! Wildcard expansion of watched directory specs.
//!
//! A spec like `uploads/media/*/photos` is expanded against the real
//! filesystem into every concrete directory under `uploads/media/` whose
//! site-root-relative path matches the compiled pattern. Literal specs pass
//! through unchanged.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::Result;
use crate::scan::path_utils::relative_str;
use crate::scan::patterns::{CompiledPattern, DirectorySpec};

/// Expand one watched spec into concrete, non-wildcard specs.
///
/// - A literal spec is returned unchanged as a one-element sequence.
/// - A wildcard spec is matched against the directories below its literal
///   base path, depth-first, in sorted discovery order.
/// - A missing base path is not an error: wildcard specs are speculative,
///   so the expansion silently yields no matches.
pub fn expand(spec: &DirectorySpec, site_root: &Path) -> Result<Vec<DirectorySpec>> {
    if !spec.has_wildcard() {
        return Ok(vec![spec.clone()]);
    }

    let resolved = spec.resolve(site_root);
    let pattern = CompiledPattern::compile(&resolved.to_string_lossy().replace('\\', "/"))?;

    let base = wildcard_base(&resolved);
    if !base.is_dir() {
        debug!(spec = %spec, base = %base.display(), "wildcard base path missing, no matches");
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(&base)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
    {
        let candidate = entry.path().to_string_lossy().replace('\\', "/");
        if pattern.matches(&candidate) {
            // Emit relative to the site root where possible, so the result
            // reads like a configured spec and resolves the same way.
            let spec = match relative_str(site_root, entry.path()) {
                Some(rel) => DirectorySpec::new(rel),
                None => DirectorySpec::new(candidate),
            };
            matches.push(spec);
        }
    }

    debug!(spec = %spec, count = matches.len(), "expanded wildcard spec");
    Ok(matches)
}

/// The literal path portion of a resolved wildcard spec: every component up
/// to (excluding) the wildcard segment.
fn wildcard_base(resolved: &Path) -> PathBuf {
    let mut base = PathBuf::new();
    for component in resolved.components() {
        if component.as_os_str() == "*" {
            break;
        }
        base.push(component);
    }
    base
}
