use std::{
    fs,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        KeyOccurrence,
        adapters::{Adapter, adapters_for},
        analyzer::FileAnalyzer,
        file_scanner::scan_files,
        parsers::jsx::parse_source,
    },
    issues::ParseErrorIssue,
};

/// Key occurrences of one source file, in document order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileScan {
    pub file_path: String,
    pub occurrences: Vec<KeyOccurrence>,
}

/// Output of [`ScanContext::scan`].
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files with at least one occurrence, sorted by path.
    pub files: Vec<FileScan>,
    /// Files that could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
    pub source_files_checked: usize,
}

impl ScanResult {
    /// All occurrences, file by file.
    pub fn occurrences(&self) -> impl Iterator<Item = &KeyOccurrence> {
        self.files.iter().flat_map(|file| file.occurrences.iter())
    }

    pub fn occurrence_count(&self) -> usize {
        self.files.iter().map(|file| file.occurrences.len()).sum()
    }
}

/// Configuration plus the list of source files for one run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--source-root`, `--library`)
/// 2. `.keyscoperc.json`
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration.
    pub config: Config,

    /// Directory the config was searched from and `sourceRoot` is resolved against.
    pub root_dir: PathBuf,

    /// Source files to analyze, sorted.
    pub files: Vec<String>,

    pub verbose: bool,
}

impl ScanContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if !common_args.libraries.is_empty() {
            config.libraries = common_args.libraries.clone();
        }

        Self::build(root_dir, config, verbose)
    }

    /// Build a context from an already loaded configuration.
    pub fn from_config(root_dir: impl Into<PathBuf>, config: Config) -> Result<Self> {
        Self::build(root_dir.into(), config, false)
    }

    fn build(root_dir: PathBuf, config: Config, verbose: bool) -> Result<Self> {
        config.validate()?;

        let scan_dir = resolve_source_root(&root_dir, &config.source_root);
        let scan_path = scan_dir
            .to_str()
            .ok_or_else(|| anyhow!("Invalid path: {:?}", scan_dir))?;

        let scan_result = scan_files(
            scan_path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files.into_iter().collect(),
            verbose,
        })
    }

    /// Adapters for the enabled libraries, in configured priority order.
    pub fn adapters(&self) -> Vec<Adapter> {
        adapters_for(&self.config.libraries)
    }

    /// Read, parse and analyze one file.
    pub fn analyze_file(&self, file_path: &str) -> Result<Vec<KeyOccurrence>> {
        analyze_path(file_path, &self.adapters())
    }

    /// Analyze every source file in parallel.
    ///
    /// Each file is parsed with its own `SourceMap`. A file that fails to
    /// read or parse becomes a [`ParseErrorIssue`] and the rest still run.
    pub fn scan(&self) -> ScanResult {
        let adapters = self.adapters();

        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, analyze_path(file_path, &adapters)))
            .collect();

        let mut scan = ScanResult {
            source_files_checked: self.files.len(),
            ..Default::default()
        };

        for (file_path, result) in results {
            match result {
                Ok(occurrences) if occurrences.is_empty() => {}
                Ok(occurrences) => scan.files.push(FileScan {
                    file_path: file_path.clone(),
                    occurrences,
                }),
                Err(e) => {
                    let error = format!("{:#}", e);
                    log::warn!("skipping {}: {}", file_path, error);
                    if self.verbose {
                        eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, error);
                    }
                    scan.parse_errors.push(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error,
                    });
                }
            }
        }

        scan
    }
}

fn analyze_path(file_path: &str, adapters: &[Adapter]) -> Result<Vec<KeyOccurrence>> {
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    let parsed = parse_source(code, file_path, Arc::new(SourceMap::default()))?;
    Ok(FileAnalyzer::new(file_path, &parsed.source_map, adapters).analyze(&parsed.module))
}

/// Resolve the configured `sourceRoot` against the root directory, keeping
/// `./`-style roots as-is so reported paths stay short.
fn resolve_source_root(root_dir: &Path, source_root: &str) -> PathBuf {
    let source_root = Path::new(source_root);
    if source_root.is_absolute() {
        return source_root.to_path_buf();
    }
    let relative: PathBuf = source_root
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if relative.as_os_str().is_empty() {
        root_dir.to_path_buf()
    } else {
        root_dir.join(relative)
    }
}
