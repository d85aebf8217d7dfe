// src/lib.rs

pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod notify;
pub mod resizer;
pub mod scan;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::batch::{BatchCoordinator, RunOutcome};
use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::errors::{ResizewalkError, Result};
use crate::resizer::{CommandResizer, Resizer};
use crate::scan::DirectorySpec;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the command-backed resizer
/// - the batch coordinator
/// - dry-run printing
pub fn run(args: CliArgs) -> Result<RunOutcome> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let mut resizer = CommandResizer::new();
    resizer.initialize_rulesets(&cfg.resizer)?;

    let watched: Vec<DirectorySpec> = cfg
        .scan
        .directories
        .iter()
        .map(DirectorySpec::new)
        .collect();

    if args.dry_run {
        let coordinator = BatchCoordinator::from_config(&cfg, &mut resizer);
        print_dry_run(&cfg, &coordinator, &watched)?;
        return Ok(RunOutcome {
            success: true,
            ..RunOutcome::default()
        });
    }

    if cfg.resizer.cmd.is_none() {
        return Err(ResizewalkError::ConfigurationMissing(
            "[resizer].cmd is required for a live run".to_string(),
        ));
    }

    info!(
        config = %config_path.display(),
        interactive = args.interactive,
        "starting batch run"
    );

    let mut coordinator = BatchCoordinator::from_config(&cfg, &mut resizer);
    let outcome = coordinator.run(&watched, args.interactive)?;

    info!(
        success = outcome.success,
        roots = outcome.roots_walked,
        dispatched = outcome.dispatched,
        "batch run finished"
    );

    Ok(outcome)
}

/// Simple dry-run output: print the resolved scan plan without dispatching.
fn print_dry_run(
    cfg: &ConfigFile,
    coordinator: &BatchCoordinator<'_>,
    watched: &[DirectorySpec],
) -> Result<()> {
    println!("resizewalk dry-run");
    println!("  scan.site_root = {}", cfg.scan.site_root);
    println!("  scan.recycler = {}", cfg.scan.recycler);
    if !cfg.scan.exclude.is_empty() {
        println!("  scan.exclude = {:?}", cfg.scan.exclude);
    }
    println!();

    let roots = coordinator.resolve_roots(watched)?;
    println!("roots after expansion and dedup ({}):", roots.len());
    for root in &roots {
        println!("  - {}", root.display());
    }

    debug!("dry-run complete (no dispatch)");
    Ok(())
}
