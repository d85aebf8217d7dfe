// src/batch/mod.rs

//! Batch run orchestration.
//!
//! The coordinator owns the control flow of one run: expand every watched
//! spec, drop overlapping roots, walk each surviving root, and forward every
//! qualifying file to the resize collaborator. It aggregates a single
//! run-level outcome and selects the notification channel from an explicit
//! capability flag; it never reaches into ambient process state to decide
//! its own behaviour.
//!
//! Execution is single-threaded and fully synchronous: the per-file work is
//! I/O- and CPU-heavy image processing, and the whole point of root
//! deduplication is to never do that work twice. Parallelism would
//! reintroduce races on the dedup set and the notification counter for no
//! benefit in a low-frequency scheduled job.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::errors::{ResizewalkError, Result};
use crate::notify::{user_visible, LogNotifier, Notifier, Severity};
use crate::resizer::{FileTarget, Resizer, UserContext};
use crate::scan::{dedup_roots, expand, DirectorySpec, TreeWalker};

/// Aggregate result of one batch run.
///
/// `success` is a non-short-circuiting aggregation: one root's failure does
/// not stop the remaining roots, and the run counts as successful only when
/// every attempted root's traversal succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutcome {
    pub success: bool,
    pub roots_walked: usize,
    pub dispatched: usize,
}

/// Orchestrates one batch run against a resize collaborator.
pub struct BatchCoordinator<'a> {
    site_root: PathBuf,
    exclude: Vec<DirectorySpec>,
    recycler: String,
    resizer: &'a mut dyn Resizer,
}

impl<'a> BatchCoordinator<'a> {
    pub fn from_config(cfg: &ConfigFile, resizer: &'a mut dyn Resizer) -> Self {
        Self {
            site_root: PathBuf::from(&cfg.scan.site_root),
            exclude: cfg.scan.exclude.iter().map(DirectorySpec::new).collect(),
            recycler: cfg.scan.recycler.clone(),
            resizer,
        }
    }

    pub fn new(
        site_root: impl Into<PathBuf>,
        exclude: Vec<DirectorySpec>,
        recycler: impl Into<String>,
        resizer: &'a mut dyn Resizer,
    ) -> Self {
        Self {
            site_root: site_root.into(),
            exclude,
            recycler: recycler.into(),
            resizer,
        }
    }

    /// Resolve the concrete, deduplicated traversal roots for this run.
    ///
    /// An empty watched list falls back to the directories known to the
    /// resize rulesets. Expansion results are concatenated in input order
    /// before deduplication, so the surviving set is deterministic.
    pub fn resolve_roots(&self, watched: &[DirectorySpec]) -> Result<Vec<PathBuf>> {
        let watched: Vec<DirectorySpec> = if watched.is_empty() {
            self.resizer.all_directories()
        } else {
            watched.to_vec()
        };

        let mut resolved = Vec::new();
        for spec in &watched {
            for concrete in expand(spec, &self.site_root)? {
                resolved.push(concrete.resolve(&self.site_root));
            }
        }

        Ok(dedup_roots(resolved))
    }

    /// Run one batch, selecting the notification channel from the
    /// capability flag: interactively-observed runs report through the
    /// capped user-visible channel, unattended runs through the log.
    pub fn run(&mut self, watched: &[DirectorySpec], interactive: bool) -> Result<RunOutcome> {
        if interactive {
            let mut notifier = user_visible();
            self.run_with_notifier(watched, &mut notifier)
        } else {
            let mut notifier = LogNotifier;
            self.run_with_notifier(watched, &mut notifier)
        }
    }

    /// Run one batch, reporting through an explicit notification channel.
    pub fn run_with_notifier(
        &mut self,
        watched: &[DirectorySpec],
        notifier: &mut dyn Notifier,
    ) -> Result<RunOutcome> {
        let extensions = self.resizer.all_file_types();
        if extensions.is_empty() {
            return Err(ResizewalkError::ConfigurationMissing(
                "resizer reports no recognized file types".to_string(),
            ));
        }

        let roots = self.resolve_roots(watched)?;
        let exclusions: Vec<PathBuf> = self
            .exclude
            .iter()
            .map(|spec| spec.resolve(&self.site_root))
            .collect();
        let walker = TreeWalker::new(exclusions, self.recycler.clone(), extensions);

        let mut outcome = RunOutcome {
            success: true,
            ..RunOutcome::default()
        };
        let resizer = &mut *self.resizer;

        for root in &roots {
            info!(root = %root.display(), "walking root");

            let mut dispatched = 0usize;
            let walked = walker.walk(root, |file| {
                dispatched += 1;
                // One file's failure must never abort the rest of the walk.
                if let Err(err) = resizer.process_file(
                    &file.path,
                    &FileTarget::unchanged(),
                    &UserContext::batch(),
                    notifier,
                ) {
                    notifier.notify(
                        &format!("processing {} failed: {err}", file.path.display()),
                        Severity::Error,
                    );
                }
            });
            outcome.dispatched += dispatched;

            match walked {
                Ok(()) => {
                    outcome.roots_walked += 1;
                    info!(root = %root.display(), dispatched, "root walked");
                }
                Err(ResizewalkError::RootNotFound(path)) => {
                    warn!(root = %path.display(), "watched root missing");
                    notifier.notify(
                        &format!("watched directory {} does not exist", path.display()),
                        Severity::Warning,
                    );
                    outcome.success = false;
                }
                Err(other) => return Err(other),
            }
        }

        Ok(outcome)
    }
}
