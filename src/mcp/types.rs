use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::{KeyOccurrence, LibraryKind},
    issues::ParseErrorIssue,
};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .keyscoperc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only analyze this file (absolute, or relative to the project root)
    pub file_path: Option<String>,
    /// Maximum number of items to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    pub source_root: String,
    pub libraries: Vec<LibraryKind>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            ignore_test_files: c.ignore_test_files,
            source_root: c.source_root,
            libraries: c.libraries,
        }
    }
}

// ============================================================
// Key Extraction Types (extract_keys)
// ============================================================

/// Result of extract_keys operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeysResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<KeyItem>,
    pub parse_errors: Vec<ParseErrorItem>,
    pub pagination: Pagination,
}

/// A single key occurrence
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// The literal key as written; absent for dynamic keys
    pub raw_key: Option<String>,
    /// Prefix-qualified key; absent when it cannot be computed
    pub effective_key: Option<String>,
    /// resolved, no-prefix or dynamic-key-unresolved
    pub status: String,
    pub unresolved_prefix: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub library: LibraryKind,
    pub callee: String,
    pub call_kind: String,
}

impl From<&KeyOccurrence> for KeyItem {
    fn from(o: &KeyOccurrence) -> Self {
        Self {
            file_path: o.file_path().to_string(),
            line: o.line(),
            col: o.col(),
            raw_key: o.raw_key.clone(),
            effective_key: o.effective_key.clone(),
            status: o.status.to_string(),
            unresolved_prefix: o.unresolved_prefix,
            namespace: o.namespace.clone(),
            library: o.library,
            callee: o.callee.clone(),
            call_kind: o.call_kind.to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

impl From<ParseErrorIssue> for ParseErrorItem {
    fn from(issue: ParseErrorIssue) -> Self {
        Self {
            file_path: issue.file_path,
            error: issue.error,
        }
    }
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub source_files_checked: usize,
    pub files_with_keys: usize,
    pub total_count: usize,
    pub by_status: StatusStats,
    /// Occurrences whose binding has a non-literal prefix or namespace
    pub unresolved_prefix_count: usize,
    pub by_library: Vec<LibraryStats>,
    pub parse_error_count: usize,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusStats {
    pub resolved: usize,
    pub no_prefix: usize,
    pub dynamic_key_unresolved: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub library: LibraryKind,
    pub count: usize,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
