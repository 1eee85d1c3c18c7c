// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running validation across a project.
//!
//! Walks directory trees, identifies markup files, and runs the validation
//! pass on each. A file that fails to parse contributes zero diagnostics
//! (logged, not surfaced), matching the engine's degrade-to-empty contract.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::diagnostics::{analyze_html, analyze_jsx, Diagnostic};
use crate::error::A11ylintError;
use crate::markup::Dialect;

/// Directories to skip.
const SKIP_DIRS: &[&str] = &[
    "node_modules", ".git", "target", "dist", "build", "_build", "vendor", ".next", "coverage",
];

/// Diagnostics for one scanned file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan a directory tree for accessibility issues.
pub fn scan_directory(dir: &Path) -> anyhow::Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    let mut files_scanned = 0;

    info!("scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_str().unwrap_or("");
            !SKIP_DIRS.contains(&name) && !name.starts_with('.')
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let Some(dialect) = Dialect::from_extension(ext) else {
            continue;
        };

        match validate_path(path, dialect) {
            Ok(diagnostics) => {
                files_scanned += 1;
                reports.push(FileReport {
                    path: path.to_path_buf(),
                    diagnostics,
                });
            }
            Err(e) => {
                info!("skipping {}: {}", path.display(), e);
            }
        }
    }

    info!(
        "scanned {} files, found {} issues",
        files_scanned,
        reports.iter().map(|r| r.diagnostics.len()).sum::<usize>()
    );

    Ok(reports)
}

/// Validate a single file.
pub fn scan_file(path: &Path) -> anyhow::Result<FileReport> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let dialect = Dialect::from_extension(ext)
        .ok_or_else(|| A11ylintError::UnsupportedFile(path.display().to_string()))?;
    let diagnostics = validate_path(path, dialect)?;
    Ok(FileReport {
        path: path.to_path_buf(),
        diagnostics,
    })
}

fn validate_path(path: &Path, dialect: Dialect) -> anyhow::Result<Vec<Diagnostic>> {
    let text = std::fs::read_to_string(path)?;
    let result = match dialect {
        Dialect::Html => analyze_html(&text),
        Dialect::Jsx => analyze_jsx(&text),
    };
    match result {
        Ok(diagnostics) => Ok(diagnostics),
        Err(A11ylintError::Parse(reason)) => {
            warn!("could not analyze {}: {}", path.display(), reason);
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_directory_picks_up_markup_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("app.tsx"), "<img src=\"/x.png\"></img>").unwrap();
        fs::write(dir.path().join("notes.txt"), "not markup").unwrap();

        let reports = scan_directory(dir.path()).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| !r.diagnostics.is_empty()));
    }

    #[test]
    fn test_scan_skips_excluded_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules/dep.html"), "<html></html>").unwrap();

        let reports = scan_directory(dir.path()).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_unparseable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.html");
        fs::write(&path, "<div class=").unwrap();

        let report = scan_file(&path).unwrap();
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.rs");
        fs::write(&path, "fn main() {}").unwrap();
        assert!(scan_file(&path).is_err());
    }

    #[test]
    fn test_scan_nonexistent_dir_is_ok_and_empty() {
        let reports = scan_directory(Path::new("/nonexistent/path")).unwrap();
        assert!(reports.is_empty());
    }
}
