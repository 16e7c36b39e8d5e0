use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of JavaScript-family sources the parser understands.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct FileScanResult {
    /// Source files found, sorted by path.
    pub files: BTreeSet<String>,
    /// Paths that could not be accessed.
    pub skipped_count: usize,
}

fn warn(verbose: bool, message: std::fmt::Arguments) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Ignore rules compiled once per scan.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &str, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignores {
            if !is_glob_pattern(p) {
                literal_paths.push(Path::new(base_dir).join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn(verbose, format_args!("Invalid ignore pattern '{}': {}", p, e)),
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.literal_paths.iter().any(|ignored| path.starts_with(ignored))
            || self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base directory, or each include resolved against it.
fn roots_to_scan(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![Path::new(base_dir).to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let full = Path::new(base_dir).join(inc);
        if !is_glob_pattern(inc) {
            if full.exists() {
                roots.push(full);
            } else {
                warn(
                    verbose,
                    format_args!("Include path does not exist: {}", full.display()),
                );
            }
            continue;
        }
        match glob(&full.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.exists())),
            Err(e) => warn(verbose, format_args!("Invalid glob pattern '{}': {}", inc, e)),
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> FileScanResult {
    let ignore_set = IgnoreSet::new(base_dir, ignores, ignore_test_files, verbose);
    let mut result = FileScanResult::default();

    for root in roots_to_scan(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignore_set.is_ignored(entry.path()));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    warn(verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) {
                result.files.insert(path.to_string_lossy().into());
            }
        }
    }

    log::debug!(
        "scanned {}: {} source files, {} skipped",
        base_dir,
        result.files.len(),
        result.skipped_count
    );
    result
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
