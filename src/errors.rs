// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Directory-level failures are deliberately split:
//! - [`ResizewalkError::RootNotFound`] is raised by the tree walker for a
//!   literally-configured root that is missing on disk (misconfiguration
//!   worth surfacing; fatal for that root, not for the run).
//! - A missing wildcard base path is *not* an error: wildcard specs are
//!   speculative and expansion simply yields no matches.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizewalkError {
    #[error("No usable configuration found: {0}")]
    ConfigurationMissing(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Watched directory does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ResizewalkError>;
