use anyhow::Result;

use super::super::args::KeysCommand;
use super::{CommandKind, CommandResult, CommandSummary, KeysSummary, helper::finish};
use crate::{core::context::ScanContext, issues::Issue};

/// List every key occurrence. Unparseable files are reported but do not
/// change the exit status.
pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let scan = ctx.scan();

    let occurrence_count = scan.occurrence_count();
    let issues = scan
        .parse_errors
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    let summary = CommandSummary::Keys(KeysSummary {
        format: cmd.format,
        files: scan.files,
        occurrence_count,
        parse_errors: scan.parse_errors,
    });

    Ok(finish(
        CommandKind::Keys,
        summary,
        issues,
        scan.source_files_checked,
        false,
    ))
}
