//! Candidate discovery: directories under the workspace root, to a fixed depth.
//!
//! Candidates are root-relative with a trailing `/` (`services/api/`), which
//! gives the separator bonus to the last path component and keeps the text
//! stable across platforms.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::{Error, Result};

/// Options controlling one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Levels below the root; 1 = direct children only, 0 = nothing
    pub depth: usize,
    /// Include dot-directories
    pub include_hidden: bool,
    /// Directory names matching any of these are skipped (and not descended into)
    pub ignore: Vec<Regex>,
}

impl ScanOptions {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            include_hidden: false,
            ignore: Vec::new(),
        }
    }

    /// Build options from config, compiling the ignore patterns.
    pub fn from_config(scan: &ScanConfig) -> Result<Self> {
        let ignore = scan
            .ignore
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            depth: scan.depth,
            include_hidden: scan.hidden,
            ignore,
        })
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    fn skips(&self, name: &str) -> bool {
        (!self.include_hidden && name.starts_with('.')) || self.ignore.iter().any(|re| re.is_match(name))
    }
}

/// Collect candidate directories under `root`, sorted.
///
/// Symlinked directories are listed but not descended into. Unreadable
/// subdirectories are skipped; only an unreadable root is an error.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<String>> {
    if options.depth == 0 {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root).map_err(|e| Error::io(root, e))?;
    let mut found = Vec::new();
    walk(entries, "", 1, options, &mut found);
    found.sort();

    debug!(root = %root.display(), depth = options.depth, dirs = found.len(), "scan complete");
    Ok(found)
}

fn walk(
    entries: fs::ReadDir,
    prefix: &str,
    depth: usize,
    options: &ScanOptions,
    found: &mut Vec<String>,
) {
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        let is_dir = file_type.is_dir() || (file_type.is_symlink() && path.is_dir());
        if !is_dir {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if options.skips(&name) {
            continue;
        }

        let rel = format!("{}{}/", prefix, name);
        found.push(rel.clone());

        if depth >= options.depth || file_type.is_symlink() {
            continue;
        }
        match fs::read_dir(&path) {
            Ok(children) => walk(children, &rel, depth + 1, options, found),
            Err(e) => debug!(path = %path.display(), error = %e, "skipping unreadable directory"),
        }
    }
}

/// Parse a newline-separated candidate list, dropping blank lines.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree(paths: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for p in paths {
            fs::create_dir_all(tmp.path().join(p)).unwrap();
        }
        tmp
    }

    #[test]
    fn test_scan_respects_depth() {
        let tmp = tree(&["a/b/c/d", "x"]);

        let got = scan(tmp.path(), &ScanOptions::new(2)).unwrap();
        assert_eq!(got, vec!["a/", "a/b/", "x/"]);

        let got = scan(tmp.path(), &ScanOptions::new(1)).unwrap();
        assert_eq!(got, vec!["a/", "x/"]);

        assert!(scan(tmp.path(), &ScanOptions::new(0)).unwrap().is_empty());
    }

    #[test]
    fn test_scan_skips_files_and_hidden() {
        let tmp = tree(&["src", ".git/objects", ".cache"]);
        fs::write(tmp.path().join("README.md"), "hi").unwrap();

        let got = scan(tmp.path(), &ScanOptions::new(3)).unwrap();
        assert_eq!(got, vec!["src/"]);

        let got = scan(tmp.path(), &ScanOptions::new(3).with_hidden(true)).unwrap();
        assert_eq!(got, vec![".cache/", ".git/", ".git/objects/", "src/"]);
    }

    #[test]
    fn test_scan_ignore_patterns_prune_subtrees() {
        let tmp = tree(&["web/node_modules/react", "web/src", "rust/target/debug"]);
        let options = ScanOptions::from_config(&ScanConfig::default()).unwrap();

        let got = scan(tmp.path(), &options).unwrap();
        assert_eq!(got, vec!["rust/", "web/", "web/src/"]);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let scan_config = ScanConfig {
            ignore: vec!["(".to_string()],
            ..ScanConfig::default()
        };
        assert!(matches!(
            ScanOptions::from_config(&scan_config),
            Err(Error::Pattern(_))
        ));
    }

    #[test]
    fn test_missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = scan(&tmp.path().join("missing"), &ScanOptions::new(2)).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dirs_listed_not_followed() {
        let tmp = tree(&["real/inner"]);
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();

        let got = scan(tmp.path(), &ScanOptions::new(3)).unwrap();
        assert_eq!(got, vec!["link/", "real/", "real/inner/"]);
    }

    #[test]
    fn test_parse_list() {
        let got = parse_list("a/\n\n  b  \nc\r\n");
        assert_eq!(got, vec!["a/", "  b", "c"]);
    }
}
