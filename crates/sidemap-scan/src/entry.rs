//! Discovered document entries and path ordering.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Stems recognized as the canonical entry document of a directory.
const INDEX_STEMS: &[&str] = &["index", "readme"];

/// A document discovered under the content root.
///
/// Entries are immutable after discovery: the scanner produces them once per
/// pass and downstream stages only read them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Path relative to the content root (always at least one component).
    pub rel_path: PathBuf,
    /// True when the filename stem matches an index convention
    /// (`index` or `readme`, case-insensitive).
    pub is_index: bool,
}

impl DocumentEntry {
    /// Create an entry, classifying the filename stem.
    #[must_use]
    pub fn new(rel_path: PathBuf) -> Self {
        let is_index = rel_path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .is_some_and(|s| INDEX_STEMS.iter().any(|i| s.eq_ignore_ascii_case(i)));
        Self { rel_path, is_index }
    }

    /// Filename stem (without the `.md` extension).
    #[must_use]
    pub fn stem(&self) -> String {
        self.rel_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Top-level directory segment, or `None` for a root-level document.
    #[must_use]
    pub fn group_key(&self) -> Option<String> {
        let mut components = self.rel_path.iter();
        let first = components.next()?;
        components
            .next()
            .is_some()
            .then(|| first.to_string_lossy().into_owned())
    }
}

/// Compare two names the way the navigation pipeline orders paths.
///
/// Primary key is the lowercased string, tiebreak is the raw string. This
/// gives a stable total order that groups case variants together, standing in
/// for locale-aware collation without pulling in a full collator.
#[must_use]
pub fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compare two relative paths with [`name_cmp`] on their `/`-joined form.
#[must_use]
pub fn path_cmp(a: &Path, b: &Path) -> Ordering {
    let a_str = a.to_string_lossy().replace('\\', "/");
    let b_str = b.to_string_lossy().replace('\\', "/");
    name_cmp(&a_str, &b_str)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_entry_classifies_index() {
        assert!(DocumentEntry::new(PathBuf::from("index.md")).is_index);
        assert!(DocumentEntry::new(PathBuf::from("guide/index.md")).is_index);
        assert!(DocumentEntry::new(PathBuf::from("README.md")).is_index);
        assert!(DocumentEntry::new(PathBuf::from("Readme.md")).is_index);
        assert!(!DocumentEntry::new(PathBuf::from("guide.md")).is_index);
        assert!(!DocumentEntry::new(PathBuf::from("indexes.md")).is_index);
    }

    #[test]
    fn test_entry_stem() {
        assert_eq!(DocumentEntry::new(PathBuf::from("guide/setup.md")).stem(), "setup");
        assert_eq!(DocumentEntry::new(PathBuf::from("README.md")).stem(), "README");
    }

    #[test]
    fn test_group_key_root_document_is_none() {
        assert_eq!(DocumentEntry::new(PathBuf::from("guide.md")).group_key(), None);
        assert_eq!(DocumentEntry::new(PathBuf::from("README.md")).group_key(), None);
    }

    #[test]
    fn test_group_key_is_first_segment() {
        assert_eq!(
            DocumentEntry::new(PathBuf::from("guide/setup.md")).group_key(),
            Some("guide".to_owned())
        );
        assert_eq!(
            DocumentEntry::new(PathBuf::from("guide/deep/page.md")).group_key(),
            Some("guide".to_owned())
        );
    }

    #[test]
    fn test_name_cmp_orders_case_insensitively_first() {
        assert_eq!(name_cmp("alpha", "Zebra"), Ordering::Less);
        assert_eq!(name_cmp("Zebra", "alpha"), Ordering::Greater);
    }

    #[test]
    fn test_name_cmp_tiebreaks_on_raw_string() {
        assert_eq!(name_cmp("Guide", "guide"), Ordering::Less);
        assert_eq!(name_cmp("guide", "guide"), Ordering::Equal);
    }

    #[test]
    fn test_path_cmp_is_total_and_stable() {
        let mut paths = vec![
            PathBuf::from("zeta.md"),
            PathBuf::from("Alpha.md"),
            PathBuf::from("guide/b.md"),
            PathBuf::from("guide/A.md"),
        ];
        paths.sort_by(|a, b| path_cmp(a, b));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("Alpha.md"),
                PathBuf::from("guide/A.md"),
                PathBuf::from("guide/b.md"),
                PathBuf::from("zeta.md"),
            ]
        );
    }
}
