#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use resizewalk::config::{ConfigFile, RawConfigFile, ResizerSection, Ruleset, ScanSection};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(site_root: impl Into<String>) -> Self {
        Self {
            config: RawConfigFile {
                scan: ScanSection {
                    site_root: site_root.into(),
                    directories: Vec::new(),
                    exclude: Vec::new(),
                    recycler: "_recycler_".to_string(),
                },
                resizer: ResizerSection::default(),
            },
        }
    }

    pub fn with_directory(mut self, spec: &str) -> Self {
        self.config.scan.directories.push(spec.to_string());
        self
    }

    pub fn with_exclude(mut self, spec: &str) -> Self {
        self.config.scan.exclude.push(spec.to_string());
        self
    }

    pub fn with_recycler(mut self, marker: &str) -> Self {
        self.config.scan.recycler = marker.to_string();
        self
    }

    pub fn with_cmd(mut self, cmd: &str) -> Self {
        self.config.resizer.cmd = Some(cmd.to_string());
        self
    }

    pub fn with_threshold_bytes(mut self, bytes: u64) -> Self {
        self.config.resizer.threshold_bytes = bytes;
        self
    }

    pub fn with_ruleset(mut self, directories: &[&str], file_types: &[&str]) -> Self {
        self.config.resizer.ruleset.push(Ruleset {
            directories: directories.iter().map(|s| s.to_string()).collect(),
            file_types: file_types.iter().map(|s| s.to_string()).collect(),
            max_width: Some(1920),
            max_height: Some(1920),
        });
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }
}

/// Temp-directory fixture with a fluent API for laying out file trees.
///
/// ```no_run
/// use resizewalk_test_utils::TempTree;
///
/// let tree = TempTree::new();
/// tree.file("fileadmin/a.jpg")
///     .file("fileadmin/sub/c.png")
///     .dir("fileadmin/empty");
/// ```
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("creating temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a small file (parent directories included).
    pub fn file(&self, rel: &str) -> &Self {
        self.file_with_size(rel, 4)
    }

    /// Create a file of a given size in bytes.
    pub fn file_with_size(&self, rel: &str, bytes: usize) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("creating parent dirs");
        }
        fs::write(&path, vec![0u8; bytes]).expect("writing fixture file");
        self
    }

    /// Create an (empty) directory.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("creating fixture dir");
        self
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
