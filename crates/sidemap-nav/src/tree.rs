//! The navigation output model.
//!
//! Plain data handed to a rendering layer: ordered groups of title+link
//! pairs plus flat navbar entries. Everything serializes to nested
//! objects/arrays with no cyclic references, so downstream consumers can
//! treat the output as configuration data.

use serde::Serialize;

/// A single navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Display title. Never empty: falls back to a curated or humanized
    /// filename stem when no title could be extracted.
    pub title: String,
    /// Canonical URL path. Index documents link to their containing
    /// directory (trailing-slash form); links are unique across a tree.
    pub link: String,
}

/// An ordered group of navigation items under one heading.
///
/// Groups are never empty: a directory whose documents were all filtered
/// out contributes no group at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    /// Display label (curated or humanized folder name).
    pub heading: String,
    /// Items in sorted document order.
    pub items: Vec<NavigationItem>,
}

/// The full sidebar model for one content root.
///
/// The quick-start group (when present) comes first, followed by one group
/// per top-level subdirectory in first-observed order. Serializes as a bare
/// array of groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    /// Ordered groups.
    pub groups: Vec<NavigationGroup>,
}

impl NavigationTree {
    /// True when no group survived assembly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

/// One entry in the flat navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display label, resolved with the same rules as group headings.
    pub text: String,
    /// Directory-style link to the section or collection.
    pub link: String,
}
