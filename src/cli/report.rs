//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format; key listings are grouped by
//! file. Separate from core logic so keyscope can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, KeysSummary, helper::compare_issues},
};
use crate::{
    core::{KeyOccurrence, ResolutionStatus},
    issues::{Issue, ParseErrorIssue, Report, ReportLocation, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Placeholder shown in listings for keys that are not string literals.
const DYNAMIC_KEY_LABEL: &str = "<dynamic>";

/// Print issues in cargo-style format to stdout.
///
/// Issues are sorted and displayed with severity, location, source context
/// and hint.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            plural(source_files, "file", "files")
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the key listing grouped by file.
pub fn print_keys(summary: &KeysSummary, source_files: usize) {
    print_keys_to(summary, source_files, &mut io::stdout().lock());
}

pub fn print_keys_to<W: Write>(summary: &KeysSummary, source_files: usize, writer: &mut W) {
    for file in &summary.files {
        let _ = writeln!(writer, "{}", file.file_path.bold().underline());

        let positions: Vec<String> = file
            .occurrences
            .iter()
            .map(|o| format!("{}:{}", o.line(), o.col()))
            .collect();
        let width = positions.iter().map(String::len).max().unwrap_or(0);

        for (occurrence, position) in file.occurrences.iter().zip(&positions) {
            let _ = writeln!(
                writer,
                "  {:<width$}  {}  {}",
                position.dimmed(),
                format_key(occurrence),
                format_details(occurrence),
                width = width
            );
        }
        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} key {} in {} of {} source {}",
            summary.occurrence_count,
            plural(summary.occurrence_count, "occurrence", "occurrences"),
            summary.files.len(),
            source_files,
            plural(source_files, "file", "files")
        )
        .green()
    );
}

/// Machine-readable output of `keyscope keys --format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeysDocument<'a> {
    source_files_checked: usize,
    occurrences: Vec<&'a KeyOccurrence>,
    parse_errors: &'a [ParseErrorIssue],
}

pub fn keys_json(summary: &KeysSummary, source_files: usize) -> Result<String> {
    let document = KeysDocument {
        source_files_checked: source_files,
        occurrences: summary
            .files
            .iter()
            .flat_map(|file| file.occurrences.iter())
            .collect(),
        parse_errors: &summary.parse_errors,
    };
    serde_json::to_string_pretty(&document).context("Failed to serialize key occurrences")
}

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::Keys(summary) => match summary.format {
            OutputFormat::Text => print_keys(summary, result.source_files_checked),
            OutputFormat::Json => println!("{}", keys_json(summary, result.source_files_checked)?),
        },
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success(result.source_files_checked);
            } else {
                report(&result.issues);
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn format_key(occurrence: &KeyOccurrence) -> String {
    match (occurrence.status, occurrence.display_key()) {
        (ResolutionStatus::DynamicKeyUnresolved, _) | (_, None) => {
            DYNAMIC_KEY_LABEL.yellow().to_string()
        }
        (ResolutionStatus::Resolved, Some(key)) => key.green().to_string(),
        (ResolutionStatus::NoPrefix, Some(key)) => key.to_string(),
    }
}

fn format_details(occurrence: &KeyOccurrence) -> String {
    let mut details = format!("{}, {}", occurrence.status, occurrence.library);
    if let Some(ns) = &occurrence.namespace {
        details.push_str(&format!(", ns {}", ns));
    }
    if occurrence.unresolved_prefix {
        details.push_str(", prefix unresolved");
    }
    format!("({})", details).dimmed().to_string()
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // File-level issues have no position to point at.
    if line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    } else {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            Some(&ctx.source_line),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_init(summary: &InitSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path).green()
    );
}

// ============================================================
// Tests
// ============================================================
