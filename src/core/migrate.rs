//! Sequential execution of the built-in plan against a project tree.
//!
//! Targets run in plan order with no transaction across them: a failure on
//! the second file leaves the first one already rewritten on disk.

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::plan::{self, FileTarget};
use crate::rewrite::{apply_rules, RuleOutcome};
use crate::utils::io;

/// Outcome of one plan target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Target path relative to the project root.
    pub path: String,
    /// Whether the rewritten content differs from what was read.
    pub changed: bool,
    /// Whether the file was written back (always false on a dry run).
    pub written: bool,
    /// Total replacements across all rules for this file.
    pub replacements: usize,
    /// How many rules matched at least once.
    pub rules_matched: usize,
    /// Per-rule outcomes, in plan order.
    pub outcomes: Vec<RuleOutcome>,
}

/// Outcome of a full run over the plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateResult {
    pub root: String,
    pub dry_run: bool,
    pub total_replacements: usize,
    pub files: Vec<FileReport>,
}

/// Runs the built-in plan under `root` (current directory when `None`).
///
/// Every target must exist before it is processed; a missing target aborts
/// the run with `target.not_found`. Rules that match nothing are silent
/// no-ops and never fail the run.
pub fn run(root: Option<&str>, dry_run: bool) -> Result<MigrateResult> {
    let root_dir = paths::resolve_root(root)?;

    let mut files = Vec::new();
    let mut total_replacements = 0;

    for target in plan::targets() {
        let report = rewrite_target(&root_dir, &target, dry_run)?;
        total_replacements += report.replacements;
        files.push(report);
    }

    Ok(MigrateResult {
        root: root_dir.display().to_string(),
        dry_run,
        total_replacements,
        files,
    })
}

fn rewrite_target(root: &Path, target: &FileTarget, dry_run: bool) -> Result<FileReport> {
    let file_path = root.join(&target.path);

    if !file_path.is_file() {
        return Err(Error::target_not_found(&target.path));
    }

    let original = io::read_file(&file_path, &format!("read {}", target.path))?;
    let (rewritten, outcomes) = apply_rules(&original, &target.rules);

    let replacements: usize = outcomes.iter().map(|o| o.replacements).sum();
    let rules_matched = outcomes.iter().filter(|o| o.replacements > 0).count();
    let changed = rewritten != original;

    // The write is unconditional outside dry runs: an all-no-op pass puts
    // the same bytes back.
    let written = if dry_run {
        false
    } else {
        io::write_file(&file_path, &rewritten, &format!("write {}", target.path))?;
        true
    };

    log_status!(
        "apply",
        "{}: {} replacement(s) from {} of {} rule(s){}",
        target.path,
        replacements,
        rules_matched,
        target.rules.len(),
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(FileReport {
        path: target.path.clone(),
        changed,
        written,
        replacements,
        rules_matched,
        outcomes,
    })
}
