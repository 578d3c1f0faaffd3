//! Recursive content-tree walking.
//!
//! The [`Scanner`] enumerates every markdown document beneath a root
//! directory, pruning excluded directories and filtering out template and
//! manifest files. The returned list is sorted with [`path_cmp`], so callers
//! see one deterministic order regardless of platform enumeration order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{DocumentEntry, path_cmp};

/// Scanner configuration.
///
/// Both lists match against base names case-insensitively. Defaults cover the
/// tooling-config and dependency-cache directories plus the template
/// placeholder and summary manifest files.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Directory names whose subtrees are never visited.
    pub excluded_dirs: Vec<String>,
    /// File base names excluded from the result set.
    pub filtered_files: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: vec![".vitepress".to_owned(), "node_modules".to_owned()],
            filtered_files: vec!["_template.md".to_owned(), "SUMMARY.md".to_owned()],
        }
    }
}

/// Error returned when scanning cannot start.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Content root does not exist or is not a directory.
    #[error("content root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
}

/// Walks a content root and collects document entries.
///
/// A scan is a pure function of filesystem state at call time: no iteration
/// state persists between calls, so [`Scanner::scan`] can be invoked
/// repeatedly and yields identical results for an unchanged tree.
///
/// Mid-walk failures (unreadable subdirectory, broken symlink, symlink
/// cycle) abort only the affected subtree with a logged warning; they never
/// fail the scan.
#[derive(Clone, Debug)]
pub struct Scanner {
    root: PathBuf,
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with default options.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    /// Create a scanner with explicit options.
    #[must_use]
    pub fn with_options(root: PathBuf, options: ScanOptions) -> Self {
        Self { root, options }
    }

    /// Scan the content root and return all documents, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidRoot`] if the root is missing or not a
    /// directory. All other failures are non-fatal and logged.
    pub fn scan(&self) -> Result<Vec<DocumentEntry>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::InvalidRoot(self.root.clone()));
        }

        let mut entries = Vec::new();
        let mut visited = HashSet::new();
        self.walk(&self.root, Path::new(""), &mut visited, &mut entries);

        entries.sort_by(|a, b| path_cmp(&a.rel_path, &b.rel_path));
        tracing::debug!(root = %self.root.display(), count = entries.len(), "content scan complete");
        Ok(entries)
    }

    /// Walk one directory level, recursing into subdirectories.
    ///
    /// `visited` tracks canonicalized directory paths for the current
    /// traversal; revisiting one means a symlink cycle, and that subtree is
    /// dropped.
    fn walk(
        &self,
        dir: &Path,
        rel: &Path,
        visited: &mut HashSet<PathBuf>,
        out: &mut Vec<DocumentEntry>,
    ) {
        let real = match fs::canonicalize(dir) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unresolvable directory");
                return;
            }
        };
        if !visited.insert(real) {
            tracing::warn!(path = %dir.display(), "symlink cycle detected, skipping subtree");
            return;
        }

        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for dir_entry in read_dir.filter_map(Result::ok) {
            let name = dir_entry.file_name();
            let name_str = name.to_string_lossy();

            // Hidden files and directories are never content
            if name_str.starts_with('.') {
                continue;
            }

            let path = dir_entry.path();
            if path.is_dir() {
                if self.is_excluded_dir(&name_str) {
                    continue;
                }
                self.walk(&path, &rel.join(&name), visited, out);
            } else if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("md")) {
                if self.is_filtered_file(&name_str) {
                    continue;
                }
                out.push(DocumentEntry::new(rel.join(&name)));
            }
        }
    }

    fn is_excluded_dir(&self, name: &str) -> bool {
        self.options
            .excluded_dirs
            .iter()
            .any(|d| d.eq_ignore_ascii_case(name))
    }

    fn is_filtered_file(&self, name: &str) -> bool {
        self.options
            .filtered_files
            .iter()
            .any(|f| f.eq_ignore_ascii_case(name))
    }
}
