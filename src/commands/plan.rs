use clap::Args;
use serde::Serialize;

use retable::plan::{self, FileTarget};

use super::CmdResult;

#[derive(Args)]
pub struct PlanArgs {}

#[derive(Serialize)]
pub struct PlanOutput {
    pub command: &'static str,
    pub total_rules: usize,
    pub targets: Vec<FileTarget>,
}

/// Prints the built-in plan. Touches no files.
pub fn run_json(_args: PlanArgs) -> CmdResult<PlanOutput> {
    let targets = plan::targets();
    let total_rules = targets.iter().map(|t| t.rules.len()).sum();

    Ok((
        PlanOutput {
            command: "plan",
            total_rules,
            targets,
        },
        0,
    ))
}
