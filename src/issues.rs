//! Issue types reported by `keyscope check`.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it to users (CLI, MCP).

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{KeyOccurrence, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DynamicKey,
    UnresolvedPrefix,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DynamicKey => write!(f, "dynamic-key"),
            Rule::UnresolvedPrefix => write!(f, "unresolved-prefix"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key argument that is not a string literal: `t(keyName)`, `` t(`a.${b}`) ``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicKeyIssue {
    pub context: SourceContext,
    /// Identifier through which the key was requested.
    pub callee: String,
}

impl DynamicKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DynamicKey
    }
}

/// Literal key requested through a binding whose prefix or namespace is not
/// a literal: `useTranslations(section)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPrefixIssue {
    pub context: SourceContext,
    pub callee: String,
    /// The raw key, when it is a literal.
    pub raw_key: Option<String>,
}

impl UnresolvedPrefixIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnresolvedPrefix
    }
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found during extraction.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DynamicKey(DynamicKeyIssue),
    UnresolvedPrefix(UnresolvedPrefixIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DynamicKey(_) => DynamicKeyIssue::severity(),
            Issue::UnresolvedPrefix(_) => UnresolvedPrefixIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DynamicKey(_) => DynamicKeyIssue::rule(),
            Issue::UnresolvedPrefix(_) => UnresolvedPrefixIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    /// Issues raised by one occurrence: a dynamic key, an unresolved prefix
    /// component, or both.
    pub fn from_occurrence(occurrence: &KeyOccurrence) -> Vec<Issue> {
        let mut issues = Vec::new();
        if occurrence.is_dynamic() {
            issues.push(Issue::DynamicKey(DynamicKeyIssue {
                context: occurrence.context.clone(),
                callee: occurrence.callee.clone(),
            }));
        }
        if occurrence.unresolved_prefix {
            issues.push(Issue::UnresolvedPrefix(UnresolvedPrefixIssue {
                context: occurrence.context.clone(),
                callee: occurrence.callee.clone(),
                raw_key: occurrence.raw_key.clone(),
            }));
        }
        issues
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; dispatched on [`Issue`] with `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

impl Report for DynamicKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("dynamic key passed to `{}`", self.callee)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("use a string literal so the key can be extracted".to_string())
    }
}

impl Report for UnresolvedPrefixIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        match &self.raw_key {
            Some(key) => format!("prefix of `{}` is not a literal (key \"{}\")", self.callee, key),
            None => format!("prefix of `{}` is not a literal", self.callee),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("pass a string literal as prefix and namespace".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
