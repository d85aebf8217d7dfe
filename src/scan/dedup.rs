// src/scan/dedup.rs

//! Removal of overlapping traversal roots.
//!
//! Watched specs commonly overlap (a parent directory and one of its named
//! children both configured), and wildcard expansion can itself produce
//! nested matches. Without this pass the same files would be handed to the
//! resizer twice per run; resizing is usually destructive and in-place, so a
//! double dispatch degrades an already-resized image further.

use std::path::PathBuf;

use tracing::debug;

/// Drop every root that is a descendant (or duplicate) of another root.
///
/// First-seen input order of the survivors is preserved. The output never
/// contains two entries where one is an ancestor of the other, regardless of
/// input order: a candidate covered by an accepted root is rejected, and a
/// candidate that covers previously-accepted roots evicts them.
///
/// Ancestry is decided component-wise via [`std::path::Path::starts_with`],
/// so `/site/media2` is never mistaken for a child of `/site/media`.
/// O(n·m) over the accepted set; root counts are dozens at most.
pub fn dedup_roots(roots: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut accepted: Vec<PathBuf> = Vec::new();

    for candidate in roots {
        if let Some(covering) = accepted.iter().find(|a| candidate.starts_with(a)) {
            debug!(
                root = %candidate.display(),
                covered_by = %covering.display(),
                "dropping overlapping root"
            );
            continue;
        }
        accepted.retain(|a| {
            let covered = a.starts_with(&candidate);
            if covered {
                debug!(
                    root = %a.display(),
                    covered_by = %candidate.display(),
                    "evicting overlapping root"
                );
            }
            !covered
        });
        accepted.push(candidate);
    }

    accepted
}
