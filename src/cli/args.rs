//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `keys`: List every translation key occurrence
//! - `check`: Report dynamic keys, unresolved prefixes and unparseable files
//! - `init`: Initialize keyscope configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::LibraryKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all scanning commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project directory to scan; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Library convention to recognize (overrides config file).
    /// Can be specified multiple times: --library i18next --library next-intl
    #[arg(long = "library", value_enum)]
    pub libraries: Vec<LibraryKind>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List translation key occurrences
    Keys(KeysCommand),
    /// Report dynamic keys and unresolved prefixes
    Check(CheckCommand),
    /// Initialize a new .keyscoperc.json configuration file
    Init,
    /// Start MCP (Model Context Protocol) server for AI integration
    Serve,
}
