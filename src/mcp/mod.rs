//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes key extraction to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: tool implementations and the stdio entry point
//! - `types`: tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{KeyscopeMcpServer, run_server};
