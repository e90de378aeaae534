use clap::Args;
use serde::Serialize;

use retable::migrate::{self, MigrateResult};

use super::CmdResult;

#[derive(Args)]
pub struct ApplyArgs {
    /// Project root containing src/db/ (defaults to the current directory)
    #[arg(long)]
    pub root: Option<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct ApplyOutput {
    pub command: &'static str,
    pub total_replacements: usize,
    pub result: MigrateResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(args: ApplyArgs, _global: &super::GlobalArgs) -> CmdResult<ApplyOutput> {
    let result = migrate::run(args.root.as_deref(), args.dry_run)?;

    let mut hints = Vec::new();
    if result.total_replacements == 0 {
        hints.push("No literals matched; both files were left as they were.".to_string());
    } else if result.dry_run {
        hints.push("Dry run: re-run without --dry-run to write the changes.".to_string());
    }

    Ok((
        ApplyOutput {
            command: "apply",
            total_replacements: result.total_replacements,
            result,
            hints,
        },
        0,
    ))
}
