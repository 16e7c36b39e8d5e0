use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandKind, CommandResult, CommandSummary, helper::finish};
use crate::{core::context::ScanContext, issues::Issue};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let scan = ctx.scan();

    let mut issues: Vec<Issue> = scan.occurrences().flat_map(Issue::from_occurrence).collect();
    issues.extend(scan.parse_errors.into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandKind::Check,
        CommandSummary::Check,
        issues,
        scan.source_files_checked,
        true,
    ))
}
