// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ResizewalkError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::ResizewalkError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.scan, raw.resizer))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_site_root(cfg)?;
    validate_recycler(cfg)?;
    validate_directory_specs(cfg)?;
    validate_rulesets(cfg)?;
    Ok(())
}

fn validate_site_root(cfg: &RawConfigFile) -> Result<()> {
    if cfg.scan.site_root.trim().is_empty() {
        return Err(ResizewalkError::ConfigError(
            "[scan].site_root must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_recycler(cfg: &RawConfigFile) -> Result<()> {
    let recycler = cfg.scan.recycler.trim_matches('/');
    if recycler.is_empty() || recycler.contains('/') {
        return Err(ResizewalkError::ConfigError(format!(
            "[scan].recycler must be a single path segment (got '{}')",
            cfg.scan.recycler
        )));
    }
    Ok(())
}

fn validate_directory_specs(cfg: &RawConfigFile) -> Result<()> {
    let ruleset_dirs = cfg.resizer.ruleset.iter().flat_map(|r| r.directories.iter());
    let all_specs = cfg
        .scan
        .directories
        .iter()
        .chain(cfg.scan.exclude.iter())
        .chain(ruleset_dirs);

    for spec in all_specs {
        let wildcards = spec.split('/').filter(|seg| *seg == "*").count();
        if wildcards > 1 {
            return Err(ResizewalkError::ConfigError(format!(
                "directory spec '{spec}' contains more than one wildcard segment"
            )));
        }
        if spec.split('/').any(|seg| seg != "*" && seg.contains('*')) {
            return Err(ResizewalkError::ConfigError(format!(
                "directory spec '{spec}' mixes wildcard and literal characters \
                 in one segment; only a bare '*' segment is supported"
            )));
        }
    }
    Ok(())
}

fn validate_rulesets(cfg: &RawConfigFile) -> Result<()> {
    for (i, ruleset) in cfg.resizer.ruleset.iter().enumerate() {
        if ruleset.file_types.is_empty() {
            return Err(ResizewalkError::ConfigError(format!(
                "[[resizer.ruleset]] #{} has no file_types",
                i + 1
            )));
        }
    }
    Ok(())
}
