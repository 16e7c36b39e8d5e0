//! Core data types shared by the analyzer, the CLI and the MCP server.
//!
//! ## Module Structure
//!
//! - `library`: LibraryKind enum (which i18n convention produced a record)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod library;
pub mod source;

pub use library::LibraryKind;
pub use source::{SourceContext, SourceLocation};
