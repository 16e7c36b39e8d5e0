use std::{collections::BTreeSet, path::Path};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::{
        KeyOccurrence, LibraryKind, ResolutionStatus,
        context::{ScanContext, ScanResult},
    },
    issues::ParseErrorIssue,
};

use super::types::{
    ConfigDto, ConfigValues, ExtractKeysParams, GetConfigParams, KeyItem, KeysResult,
    LibraryStats, Pagination, ParseErrorItem, ScanOverviewParams, ScanOverviewResult, StatusStats,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

#[derive(Clone)]
pub struct KeyscopeMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for KeyscopeMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Load the project's configuration and list its source files.
fn project_context(project_root: &str) -> Result<ScanContext, McpError> {
    let root = Path::new(project_root);
    let config = load_config(root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?
        .config;
    ScanContext::from_config(root, config)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Occurrences and parse errors of a single file.
fn scan_single_file(ctx: &ScanContext, file_path: &str) -> (Vec<KeyOccurrence>, Vec<ParseErrorIssue>) {
    let path = if Path::new(file_path).is_absolute() {
        file_path.to_string()
    } else {
        ctx.root_dir.join(file_path).to_string_lossy().to_string()
    };
    match ctx.analyze_file(&path) {
        Ok(occurrences) => (occurrences, Vec::new()),
        Err(e) => (
            Vec::new(),
            vec![ParseErrorIssue {
                file_path: path,
                error: format!("{:#}", e),
            }],
        ),
    }
}

fn overview(scan: &ScanResult, libraries: &[LibraryKind]) -> ScanOverviewResult {
    let mut by_status = StatusStats::default();
    let mut unresolved_prefix_count = 0;
    for occurrence in scan.occurrences() {
        match occurrence.status {
            ResolutionStatus::Resolved => by_status.resolved += 1,
            ResolutionStatus::NoPrefix => by_status.no_prefix += 1,
            ResolutionStatus::DynamicKeyUnresolved => by_status.dynamic_key_unresolved += 1,
        }
        if occurrence.unresolved_prefix {
            unresolved_prefix_count += 1;
        }
    }

    let by_library = libraries
        .iter()
        .map(|&library| LibraryStats {
            library,
            count: scan.occurrences().filter(|o| o.library == library).count(),
        })
        .collect();

    ScanOverviewResult {
        source_files_checked: scan.source_files_checked,
        files_with_keys: scan.files.len(),
        total_count: scan.occurrence_count(),
        by_status,
        unresolved_prefix_count,
        by_library,
        parse_error_count: scan.parse_errors.len(),
    }
}

#[tool_router]
impl KeyscopeMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current keyscope configuration
    #[tool(description = "Get the current keyscope configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        to_json(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Extract translation key occurrences
    #[tool(
        description = "Extract translation key occurrences with their effective (prefix-qualified) keys. Optionally limited to one file. Returns paginated list."
    )]
    pub async fn extract_keys(
        &self,
        params: Parameters<ExtractKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = project_context(&params.project_root_path)?;

        let (occurrences, parse_errors) = match &params.file_path {
            Some(file_path) => scan_single_file(&ctx, file_path),
            None => {
                let scan = ctx.scan();
                let occurrences = scan.occurrences().cloned().collect();
                (occurrences, scan.parse_errors)
            }
        };

        let total_count = occurrences.len();
        let total_file_count = occurrences
            .iter()
            .map(|o| o.file_path())
            .collect::<BTreeSet<_>>()
            .len();

        let items: Vec<KeyItem> = occurrences
            .iter()
            .skip(offset)
            .take(limit)
            .map(KeyItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        to_json(&KeysResult {
            total_count,
            total_file_count,
            items,
            parse_errors: parse_errors.into_iter().map(ParseErrorItem::from).collect(),
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get statistics of key occurrences
    #[tool(
        description = "Get statistics of key occurrences per resolution status and per library, without detailed items. Use this first to understand the overall state."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = project_context(&params.0.project_root_path)?;
        let scan = ctx.scan();
        to_json(&overview(&scan, &ctx.config.libraries))
    }
}

#[tool_handler]
impl ServerHandler for KeyscopeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "keyscope extracts translation keys from JavaScript/TypeScript projects using \
                 i18next, react-i18next or next-intl, resolving scoped key prefixes.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_overview - Count key occurrences per status and library\n\
                 3. extract_keys - List key occurrences with effective keys (paginated)\n\n\
                 Occurrences with status dynamic-key-unresolved or unresolvedPrefix=true \
                 cannot be mapped to a message key statically."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            log::debug!("starting MCP server on stdio");
            let service = KeyscopeMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
