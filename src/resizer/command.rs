// src/resizer/command.rs

//! Command-backed resizer implementation.
//!
//! Runs the configured shell command once per dispatched file, skipping
//! files that are already small enough. All execution is synchronous; the
//! batch core processes one file after another by design.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Context};
use tracing::{debug, info};

use crate::config::ResizerSection;
use crate::errors::Result;
use crate::notify::{Notifier, Severity};
use crate::resizer::{FileTarget, Resizer, UserContext};
use crate::scan::DirectorySpec;

/// Production [`Resizer`] that shells out per file.
#[derive(Debug, Default)]
pub struct CommandResizer {
    cmd: Option<String>,
    threshold_bytes: u64,
    file_types: Vec<String>,
    directories: Vec<DirectorySpec>,
}

impl CommandResizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn run_command(&self, template: &str, path: &Path) -> Result<std::process::Output> {
        let rendered = template.replace("%s", &shell_quote(path));

        // Build a shell command appropriate for the platform.
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&rendered);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&rendered);
            c
        };

        let output = cmd
            .output()
            .with_context(|| format!("spawning resize command for {}", path.display()))?;
        Ok(output)
    }
}

impl Resizer for CommandResizer {
    fn initialize_rulesets(&mut self, cfg: &ResizerSection) -> Result<()> {
        self.cmd = cfg.cmd.clone();
        self.threshold_bytes = cfg.threshold_bytes;

        self.file_types.clear();
        self.directories.clear();
        for ruleset in &cfg.ruleset {
            for file_type in &ruleset.file_types {
                let file_type = file_type.to_lowercase();
                if !self.file_types.contains(&file_type) {
                    self.file_types.push(file_type);
                }
            }
            self.directories
                .extend(ruleset.directories.iter().map(DirectorySpec::new));
        }

        debug!(
            file_types = ?self.file_types,
            directories = self.directories.len(),
            "resizer rulesets initialized"
        );
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
        let template = self
            .cmd
            .clone()
            .ok_or_else(|| anyhow!("no [resizer].cmd configured"))?;

        let size = fs::metadata(path)
            .with_context(|| format!("reading metadata for {}", path.display()))?
            .len();
        if size <= self.threshold_bytes {
            notifier.notify(
                &format!("{} is already small enough, left alone", path.display()),
                Severity::Info,
            );
            return Ok(());
        }

        let output = self.run_command(&template, path)?;
        if output.status.success() {
            info!(file = %path.display(), "resized");
            notifier.notify(&format!("resized {}", path.display()), Severity::Ok);
        } else {
            let code = output.status.code().unwrap_or(-1);
            notifier.notify(
                &format!(
                    "resize command failed for {} (exit {code}): {}",
                    path.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                Severity::Warning,
            );
        }
        Ok(())
    }
}

/// Quote a path for use inside `sh -c`.
fn shell_quote(path: &Path) -> String {
    if cfg!(windows) {
        format!("\"{}\"", path.display())
    } else {
        format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
    }
}
