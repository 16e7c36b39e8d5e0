//! keyscope - scope-aware translation key extraction
//!
//! keyscope walks JavaScript/TypeScript (JSX/TSX) sources and reports every
//! translation key they request, resolving the key prefix each `t` binding
//! carries through lexical scopes. It understands i18next, react-i18next
//! (`useTranslation`, `<Translation>`, `<Trans>`) and next-intl.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scopes, adapters, analyzer)
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
