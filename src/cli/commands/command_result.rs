use crate::{
    cli::args::OutputFormat,
    core::context::FileScan,
    issues::{Issue, ParseErrorIssue},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Keys,
    Check,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Keys(KeysSummary),
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct KeysSummary {
    pub format: OutputFormat,
    /// Files with occurrences, sorted by path.
    pub files: Vec<FileScan>,
    pub occurrence_count: usize,
    pub parse_errors: Vec<ParseErrorIssue>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: String,
}

/// Result of running keyscope commands
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when any issue was found.
    /// If false, always exit 0 (listing commands that only report work).
    pub exit_on_problems: bool,
    /// All issues found during the run, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files that were analyzed.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn has_problems(&self) -> bool {
        self.error_count + self.warning_count > 0
    }
}
