// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [scan]
/// site_root = "/var/www/site"
/// directories = ["fileadmin", "uploads/media/*/photos"]
/// exclude = ["fileadmin/_temp_"]
///
/// [resizer]
/// cmd = "mogrify -resize 1920x1920> %s"
///
/// [[resizer.ruleset]]
/// directories = ["fileadmin"]
/// file_types = ["jpg", "jpeg", "png"]
/// max_width = 1920
/// max_height = 1920
/// ```
///
/// This is the *raw*, unvalidated shape; semantic validation happens in
/// [`crate::config::validate`] when converting into [`ConfigFile`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Traversal configuration from `[scan]`.
    pub scan: ScanSection,

    /// External resizer configuration from `[resizer]`.
    #[serde(default)]
    pub resizer: ResizerSection,
}

/// Validated configuration.
///
/// Constructed through `TryFrom<RawConfigFile>` (see `validate.rs`); holding
/// one of these means the wildcard/recycler/ruleset invariants already hold.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub scan: ScanSection,
    pub resizer: ResizerSection,
}

impl ConfigFile {
    /// Wrap already-validated sections. Only `validate.rs` and the test
    /// builders should call this.
    pub fn new_unchecked(scan: ScanSection, resizer: ResizerSection) -> Self {
        Self { scan, resizer }
    }
}

/// `[scan]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSection {
    /// Absolute base directory all relative specs resolve against.
    pub site_root: String,

    /// Watched directory specs, relative to `site_root` (or absolute).
    ///
    /// Each spec may contain at most one wildcard segment (`*`), meaning
    /// "any one immediate subdirectory at this position". If the list is
    /// empty, the resizer's own ruleset directories are used instead.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Excluded directory specs. A file is skipped when its containing
    /// directory equals, or lies under, any of these.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Trash-marker directory name; contents are never dispatched.
    #[serde(default = "default_recycler")]
    pub recycler: String,
}

fn default_recycler() -> String {
    "_recycler_".to_string()
}

/// `[resizer]` section.
///
/// Everything here is handed verbatim to the resizer collaborator via
/// `initialize_rulesets`; the scan core itself only ever consumes the
/// derived file-type and directory lists.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResizerSection {
    /// Shell command template run per file; `%s` is replaced by the
    /// absolute file path.
    #[serde(default)]
    pub cmd: Option<String>,

    /// Files at or below this size (bytes) are left alone by the command
    /// backend.
    #[serde(default = "default_threshold_bytes")]
    pub threshold_bytes: u64,

    /// Resize rulesets from `[[resizer.ruleset]]`.
    #[serde(default)]
    pub ruleset: Vec<Ruleset>,
}

fn default_threshold_bytes() -> u64 {
    // Matches a typical "anything under ~400 KB is already small enough".
    400_000
}

/// One `[[resizer.ruleset]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Ruleset {
    /// Directory specs this ruleset applies to (same syntax as
    /// `scan.directories`). Their concatenation is the fallback watched
    /// list when `scan.directories` is empty.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Recognized file extensions, compared case-insensitively.
    #[serde(default)]
    pub file_types: Vec<String>,

    /// Maximum pixel width enforced by the resizer.
    #[serde(default)]
    pub max_width: Option<u32>,

    /// Maximum pixel height enforced by the resizer.
    #[serde(default)]
    pub max_height: Option<u32>,
}
