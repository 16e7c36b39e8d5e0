//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `adapters`: per-library recognition of bindings and key usages
//! - `analyzer`: single-pass AST traversal producing key occurrences
//! - `context`: configuration, file scanning and parallel per-file analysis
//! - `data`: shared data types (source locations, library kinds)
//! - `extract`: key occurrence construction from a call and its binding
//! - `file_scanner`: source file discovery
//! - `key_occurrence`: the output record
//! - `parsers`: swc front end
//! - `resolve`: binding registration into scopes
//! - `scope`: lexical scope stack

pub mod adapters;
pub mod analyzer;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod key_occurrence;
pub mod parsers;
pub mod resolve;
pub mod scope;

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

pub use data::{LibraryKind, SourceContext, SourceLocation};
pub use key_occurrence::{CallKind, KeyOccurrence, ResolutionStatus};
pub use scope::{ScopeEntry, ScopeTracker, StaticArg, TranslationBinding};

use crate::core::{adapters::adapters_for, analyzer::FileAnalyzer, parsers::jsx::parse_source};

/// Parse `code` and extract its key occurrences with the given libraries enabled.
///
/// `file_path` picks the parser dialect and is reported in every location.
pub fn analyze_source(
    code: &str,
    file_path: &str,
    libraries: &[LibraryKind],
) -> Result<Vec<KeyOccurrence>> {
    let parsed = parse_source(code.to_string(), file_path, Arc::new(SourceMap::default()))?;
    let adapters = adapters_for(libraries);
    Ok(FileAnalyzer::new(file_path, &parsed.source_map, &adapters).analyze(&parsed.module))
}
