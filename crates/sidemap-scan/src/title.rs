//! Best-effort document title resolution.
//!
//! Titles come from a priority chain: first H1 heading line, then a `title:`
//! key in a leading frontmatter block, then nothing. Read failures are
//! swallowed; the caller applies the [`humanize`] fallback. An mtime cache
//! avoids re-reading unchanged files across builds.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use regex::Regex;

/// Cached resolution result for one file.
#[derive(Clone, Debug)]
struct CachedTitle {
    mtime: SystemTime,
    title: Option<String>,
}

/// Resolves display titles from markdown documents.
///
/// Resolution is best-effort: any I/O failure yields `None` rather than an
/// error, so one unreadable file never aborts a build. The resolver is
/// `Send + Sync`; the internal cache is the only shared state and sits behind
/// a mutex, which lets callers resolve titles from parallel workers.
pub struct TitleResolver {
    h1_regex: Regex,
    title_key_regex: Regex,
    cache: Mutex<HashMap<PathBuf, CachedTitle>>,
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleResolver {
    /// Create a resolver with an empty cache.
    ///
    /// # Panics
    ///
    /// Panics if the internal regexes fail to compile. This cannot happen as
    /// both are compile-time constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            h1_regex: Regex::new(r"^#\s+(.+)$").unwrap(),
            title_key_regex: Regex::new(r"^\s*title:\s*(.+)$").unwrap(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the title of the document at `path`.
    ///
    /// Returns `None` when no title can be extracted or the file cannot be
    /// read; the caller decides the fallback.
    ///
    /// # Panics
    ///
    /// Panics if the internal cache mutex is poisoned.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<String> {
        let current_mtime = fs::metadata(path).ok().and_then(|m| m.modified().ok());

        {
            let cache = self.cache.lock().unwrap();
            if let (Some(cached), Some(mtime)) = (cache.get(path), current_mtime)
                && cached.mtime == mtime
            {
                return cached.title.clone();
            }
        }

        let title = match fs::read_to_string(path) {
            Ok(content) => self.title_from_content(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read document for title");
                None
            }
        };

        if let Some(mtime) = current_mtime {
            let mut cache = self.cache.lock().unwrap();
            cache.insert(
                path.to_path_buf(),
                CachedTitle {
                    mtime,
                    title: title.clone(),
                },
            );
        }

        title
    }

    /// Extract a title from raw markdown content.
    ///
    /// Scans top-to-bottom for the first H1 heading line; if none exists,
    /// falls back to a `title:` key inside a closed leading frontmatter
    /// block (surrounding quotes stripped).
    #[must_use]
    pub fn title_from_content(&self, content: &str) -> Option<String> {
        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(caps) = self.h1_regex.captures(line) {
                return Some(caps[1].trim().to_owned());
            }
        }

        self.frontmatter_title(content)
    }

    /// Look up `title:` inside a leading `---` fenced block.
    ///
    /// The block must start on the first line and be closed; otherwise there
    /// is no frontmatter to consult.
    fn frontmatter_title(&self, content: &str) -> Option<String> {
        let mut lines = content.lines();
        if lines.next()?.trim_end() != "---" {
            return None;
        }

        let mut block = Vec::new();
        let mut closed = false;
        for line in lines {
            if line.trim_end() == "---" {
                closed = true;
                break;
            }
            block.push(line);
        }
        if !closed {
            return None;
        }

        for line in block {
            if let Some(caps) = self.title_key_regex.captures(line) {
                return Some(strip_quotes(caps[1].trim()).to_owned());
            }
        }
        None
    }
}

/// Strip one leading and one trailing quote character, independently.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

/// Humanize a filename stem into a display title.
///
/// Runs of hyphens and underscores become a single space and the first
/// letter of each word is uppercased: `00-intro` becomes `00 Intro`,
/// `setup_guide` becomes `Setup Guide`.
#[must_use]
pub fn humanize(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
