//! Curated display-name lookup.

use std::collections::HashMap;

use sidemap_scan::humanize;

/// Immutable table mapping directory/file identifiers to curated display
/// names.
///
/// Consulted before the humanization fallback, and passed into builders as
/// plain configuration rather than shared global state, so tests can inject
/// fixtures.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Curated name for `key`, if one exists.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Display name for `key`: the curated name, else the humanized form.
    #[must_use]
    pub fn display(&self, key: &str) -> String {
        self.names
            .get(key)
            .cloned()
            .unwrap_or_else(|| humanize(key))
    }
}

impl From<HashMap<String, String>> for NameTable {
    fn from(names: HashMap<String, String>) -> Self {
        Self { names }
    }
}

impl FromIterator<(String, String)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table() -> NameTable {
        [("guide".to_owned(), "Field Guide".to_owned())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_curated_name_wins() {
        assert_eq!(table().display("guide"), "Field Guide");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(table().get("Guide"), None);
        assert_eq!(table().display("Guide"), "Guide");
    }

    #[test]
    fn test_unknown_key_is_humanized() {
        assert_eq!(table().display("code-smells"), "Code Smells");
    }
}
