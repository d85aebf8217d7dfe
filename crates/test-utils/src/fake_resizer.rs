use std::path::{Path, PathBuf};

use anyhow::anyhow;

use resizewalk::config::ResizerSection;
use resizewalk::errors::Result;
use resizewalk::notify::{Notifier, Severity};
use resizewalk::resizer::{FileTarget, Resizer, UserContext};
use resizewalk::scan::DirectorySpec;

/// A fake resizer that:
/// - records which files were dispatched, in order
/// - optionally notifies Ok per processed file (to exercise the cap)
/// - optionally fails for chosen paths.
#[derive(Debug, Default)]
pub struct FakeResizer {
    file_types: Vec<String>,
    directories: Vec<DirectorySpec>,
    fail_paths: Vec<PathBuf>,
    notify_ok: bool,
    pub processed: Vec<PathBuf>,
}

impl FakeResizer {
    pub fn new(file_types: &[&str]) -> Self {
        Self {
            file_types: file_types.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Directories reported by `all_directories` (the watched fallback).
    pub fn with_directories(mut self, specs: &[&str]) -> Self {
        self.directories = specs.iter().map(|s| DirectorySpec::new(*s)).collect();
        self
    }

    /// Make `process_file` return an error for this path.
    pub fn with_failure_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_paths.push(path.into());
        self
    }

    /// Emit an Ok notification for every processed file.
    pub fn with_ok_notifications(mut self) -> Self {
        self.notify_ok = true;
        self
    }
}

impl Resizer for FakeResizer {
    fn initialize_rulesets(&mut self, _cfg: &ResizerSection) -> Result<()> {
        Ok(())
    }

    fn all_file_types(&self) -> Vec<String> {
        self.file_types.clone()
    }

    fn all_directories(&self) -> Vec<DirectorySpec> {
        self.directories.clone()
    }

    fn process_file(
        &mut self,
        path: &Path,
        _target: &FileTarget,
        _user: &UserContext,
        notifier: &mut dyn Notifier,
    ) -> Result<()> {
        self.processed.push(path.to_path_buf());

        if self.fail_paths.iter().any(|p| p == path) {
            return Err(anyhow!("simulated failure for {}", path.display()).into());
        }
        if self.notify_ok {
            notifier.notify(&format!("resized {}", path.display()), Severity::Ok);
        }
        Ok(())
    }
}

/// Notifier that records every delivered event.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub events: Vec<(String, Severity)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_at_or_below(&self, severity: Severity) -> usize {
        self.events.iter().filter(|(_, s)| *s <= severity).count()
    }

    pub fn count_at_or_above(&self, severity: Severity) -> usize {
        self.events.iter().filter(|(_, s)| *s >= severity).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.events.push((message.to_string(), severity));
    }
}
