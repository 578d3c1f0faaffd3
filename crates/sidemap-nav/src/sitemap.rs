//! Site maps for roots holding several documentation collections.
//!
//! A site root like `docs/` may contain one directory per handbook. The
//! [`SiteMapBuilder`] builds a sidebar tree per collection plus one
//! collection-level navigation bar, mirroring what a single [`NavBuilder`]
//! does for one content root.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use sidemap_config::Config;
use sidemap_scan::{ScanError, ScanOptions, name_cmp};

use crate::builder::NavBuilder;
use crate::names::NameTable;
use crate::tree::{NavEntry, NavigationTree};

/// Sidebar tree for one collection, keyed by its route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionNav {
    /// Route prefix in directory form (e.g. `/react-handbook/`).
    pub route: String,
    /// Sidebar tree for the collection, links prefixed with the route.
    pub tree: NavigationTree,
}

/// Navigation model for a multi-collection site root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteMap {
    /// Top navigation bar, one entry per collection.
    pub nav: Vec<NavEntry>,
    /// Per-collection sidebar trees, in navbar order.
    pub sidebars: Vec<CollectionNav>,
}

impl SiteMap {
    /// Sidebar tree for a route (e.g. `/react-handbook/`), if present.
    #[must_use]
    pub fn sidebar(&self, route: &str) -> Option<&NavigationTree> {
        self.sidebars
            .iter()
            .find(|c| c.route == route)
            .map(|c| &c.tree)
    }
}

/// Builds a [`SiteMap`] from the immediate subdirectories of a site root.
///
/// Collections are enumerated in the same order the scanner sorts paths,
/// since platform directory enumeration order is not deterministic. Excluded
/// and hidden directory names never become collections.
pub struct SiteMapBuilder {
    site_root: PathBuf,
    options: ScanOptions,
    collection_names: NameTable,
    group_names: NameTable,
    quick_start_heading: String,
}

impl SiteMapBuilder {
    /// Create a builder for a site root with default options.
    #[must_use]
    pub fn new(site_root: PathBuf) -> Self {
        Self {
            site_root,
            options: ScanOptions::default(),
            collection_names: NameTable::new(),
            group_names: NameTable::new(),
            quick_start_heading: "Quick Start".to_owned(),
        }
    }

    /// Create a builder from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_root: config.content_resolved.root.clone(),
            options: config.scan_options(),
            collection_names: NameTable::from(config.names.collections.clone()),
            group_names: NameTable::from(config.names.groups.clone()),
            quick_start_heading: config.navigation.quick_start_heading.clone(),
        }
    }

    /// Replace the scanner options used inside every collection.
    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the curated names for collection directories.
    #[must_use]
    pub fn with_collection_names(mut self, names: NameTable) -> Self {
        self.collection_names = names;
        self
    }

    /// Replace the curated names used for groups and stems inside
    /// collections.
    #[must_use]
    pub fn with_group_names(mut self, names: NameTable) -> Self {
        self.group_names = names;
        self
    }

    /// Replace the heading of every collection's quick-start group.
    #[must_use]
    pub fn with_quick_start_heading(mut self, heading: String) -> Self {
        self.quick_start_heading = heading;
        self
    }

    /// Build the site map.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidRoot`] if the site root is missing,
    /// not a directory, or unreadable.
    pub fn build(&self) -> Result<SiteMap, ScanError> {
        let mut dirs = self.collection_dirs()?;
        dirs.sort_by(|a, b| name_cmp(a, b));

        let mut nav = Vec::new();
        let mut sidebars = Vec::new();
        for dir in dirs {
            let tree = NavBuilder::new(self.site_root.join(&dir))
                .with_options(self.options.clone())
                .with_names(self.group_names.clone())
                .with_quick_start_heading(self.quick_start_heading.clone())
                .with_link_base(dir.clone())
                .build()?;

            nav.push(NavEntry {
                text: self.collection_names.display(&dir),
                link: format!("/{dir}/"),
            });
            sidebars.push(CollectionNav {
                route: format!("/{dir}/"),
                tree,
            });
        }

        Ok(SiteMap { nav, sidebars })
    }

    /// Immediate subdirectories of the site root that can hold collections.
    fn collection_dirs(&self) -> Result<Vec<String>, ScanError> {
        if !self.site_root.is_dir() {
            return Err(ScanError::InvalidRoot(self.site_root.clone()));
        }
        let read_dir = fs::read_dir(&self.site_root)
            .map_err(|_| ScanError::InvalidRoot(self.site_root.clone()))?;

        let mut dirs = Vec::new();
        for entry in read_dir.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if self
                .options
                .excluded_dirs
                .iter()
                .any(|d| d.eq_ignore_ascii_case(&name))
            {
                continue;
            }
            if entry.path().is_dir() {
                dirs.push(name);
            }
        }
        Ok(dirs)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write_collection(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("guide")).unwrap();
        fs::write(dir.join("README.md"), format!("# {name} Home\n")).unwrap();
        fs::write(dir.join("guide").join("setup.md"), "# Setup\n").unwrap();
    }

    #[test]
    fn test_site_map_builder_is_send_sync() {
        static_assertions::assert_impl_all!(SiteMapBuilder: Send, Sync);
    }

    #[test]
    fn test_build_missing_root_errors() {
        let err = SiteMapBuilder::new(PathBuf::from("/nonexistent/site"))
            .build()
            .unwrap_err();

        assert!(matches!(err, ScanError::InvalidRoot(_)));
    }

    #[test]
    fn test_build_collects_collections_in_sorted_order() {
        let temp_dir = create_test_dir();
        write_collection(temp_dir.path(), "vue-handbook");
        write_collection(temp_dir.path(), "React-handbook");

        let map = SiteMapBuilder::new(temp_dir.path().to_path_buf())
            .build()
            .unwrap();

        let routes: Vec<_> = map.sidebars.iter().map(|c| c.route.as_str()).collect();
        assert_eq!(routes, vec!["/React-handbook/", "/vue-handbook/"]);
        let texts: Vec<_> = map.nav.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["React Handbook", "Vue Handbook"]);
    }

    #[test]
    fn test_collection_links_carry_route_prefix() {
        let temp_dir = create_test_dir();
        write_collection(temp_dir.path(), "react-handbook");

        let map = SiteMapBuilder::new(temp_dir.path().to_path_buf())
            .build()
            .unwrap();

        let tree = map.sidebar("/react-handbook/").unwrap();
        let links: Vec<_> = tree
            .groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.link.as_str()))
            .collect();
        assert_eq!(links, vec!["/react-handbook/", "/react-handbook/guide/setup"]);
    }

    #[test]
    fn test_curated_collection_names_win() {
        let temp_dir = create_test_dir();
        write_collection(temp_dir.path(), "es-handbook");

        let names: NameTable = [("es-handbook".to_owned(), "ECMAScript Handbook".to_owned())]
            .into_iter()
            .collect();
        let map = SiteMapBuilder::new(temp_dir.path().to_path_buf())
            .with_collection_names(names)
            .build()
            .unwrap();

        assert_eq!(map.nav[0].text, "ECMAScript Handbook");
        assert_eq!(map.nav[0].link, "/es-handbook/");
    }

    #[test]
    fn test_excluded_and_hidden_directories_are_not_collections() {
        let temp_dir = create_test_dir();
        write_collection(temp_dir.path(), "guide-book");
        write_collection(temp_dir.path(), "node_modules");
        write_collection(temp_dir.path(), ".vitepress");
        fs::write(temp_dir.path().join("stray.md"), "# Stray\n").unwrap();

        let map = SiteMapBuilder::new(temp_dir.path().to_path_buf())
            .build()
            .unwrap();

        assert_eq!(map.nav.len(), 1);
        assert_eq!(map.nav[0].link, "/guide-book/");
    }

    #[test]
    fn test_empty_collection_keeps_nav_entry_with_empty_tree() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("placeholder")).unwrap();

        let map = SiteMapBuilder::new(temp_dir.path().to_path_buf())
            .build()
            .unwrap();

        assert_eq!(map.nav.len(), 1);
        assert!(map.sidebar("/placeholder/").unwrap().is_empty());
    }

    #[test]
    fn test_sidebar_lookup_for_unknown_route() {
        let map = SiteMap::default();

        assert!(map.sidebar("/missing/").is_none());
    }

    #[test]
    fn test_site_map_serializes_to_plain_data() {
        let temp_dir = create_test_dir();
        write_collection(temp_dir.path(), "vue-handbook");

        let map = SiteMapBuilder::new(temp_dir.path().to_path_buf())
            .build()
            .unwrap();
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(json["nav"][0]["link"], "/vue-handbook/");
        assert_eq!(json["sidebars"][0]["route"], "/vue-handbook/");
        assert!(json["sidebars"][0]["tree"].is_array());
    }

    #[test]
    fn test_from_config_uses_collection_names() {
        let temp_dir = create_test_dir();
        let docs = temp_dir.path().join("docs");
        write_collection(&docs, "vue-handbook");

        let config_path = temp_dir.path().join("sidemap.toml");
        fs::write(
            &config_path,
            "[names.collections]\n\"vue-handbook\" = \"Vue 3 Handbook\"\n",
        )
        .unwrap();
        let config = Config::load(Some(&config_path)).unwrap();

        let map = SiteMapBuilder::from_config(&config).build().unwrap();

        assert_eq!(map.nav[0].text, "Vue 3 Handbook");
    }

    #[test]
    fn test_build_is_idempotent() {
        let temp_dir = create_test_dir();
        write_collection(temp_dir.path(), "a-book");
        write_collection(temp_dir.path(), "b-book");

        let builder = SiteMapBuilder::new(temp_dir.path().to_path_buf());
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first, second);
    }
}
