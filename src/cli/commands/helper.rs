use std::cmp::Ordering;

use super::{CommandKind, CommandResult, CommandSummary};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Sort key of an issue: file path, then line and column. File-level issues
/// sort before positioned ones in the same file.
fn location_key(issue: &Issue) -> (&str, usize, usize) {
    match issue.location() {
        ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    location_key(a)
        .cmp(&location_key(b))
        .then_with(|| a.rule().cmp(&b.rule()))
}

pub fn finish(
    kind: CommandKind,
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    exit_on_problems: bool,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        kind,
        summary,
        error_count,
        warning_count,
        exit_on_problems,
        issues,
        parse_error_count,
        source_files_checked,
    }
}
