//! Sidebar tree assembly for a single content root.
//!
//! [`NavBuilder`] drives the full pipeline: scan the root, resolve document
//! titles (fanned out over the rayon pool), then assemble groups in a single
//! deterministic pass over the sorted document list.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use rayon::prelude::*;
use sidemap_config::Config;
use sidemap_scan::{DocumentEntry, ScanError, ScanOptions, Scanner, TitleResolver};

use crate::names::NameTable;
use crate::tree::{NavEntry, NavigationGroup, NavigationItem, NavigationTree};

/// Builds the navigation model for one content root.
///
/// Running the builder twice against an unchanged filesystem snapshot
/// produces a structurally identical tree: the scanner sorts globally, group
/// order comes from first appearance in that sorted list, and duplicate
/// links are dropped deterministically (first seen wins, with a warning).
pub struct NavBuilder {
    root: PathBuf,
    options: ScanOptions,
    names: NameTable,
    quick_start_heading: String,
    link_base: String,
    resolver: TitleResolver,
}

impl NavBuilder {
    /// Create a builder for a content root with default options.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            options: ScanOptions::default(),
            names: NameTable::new(),
            quick_start_heading: "Quick Start".to_owned(),
            link_base: String::new(),
            resolver: TitleResolver::new(),
        }
    }

    /// Create a builder from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.content_resolved.root.clone())
            .with_options(config.scan_options())
            .with_names(NameTable::from(config.names.groups.clone()))
            .with_quick_start_heading(config.navigation.quick_start_heading.clone())
    }

    /// Replace the scanner options.
    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the curated name table used for headings and title fallbacks.
    #[must_use]
    pub fn with_names(mut self, names: NameTable) -> Self {
        self.names = names;
        self
    }

    /// Replace the heading of the synthesized root-level group.
    #[must_use]
    pub fn with_quick_start_heading(mut self, heading: String) -> Self {
        self.quick_start_heading = heading;
        self
    }

    /// Prefix every link with `/<base>` (used for collection sub-sites).
    #[must_use]
    pub fn with_link_base(mut self, base: String) -> Self {
        self.link_base = base;
        self
    }

    /// Build the sidebar tree for this root.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidRoot`] if the content root is missing or
    /// not a directory. Per-document failures never surface here.
    pub fn build(&self) -> Result<NavigationTree, ScanError> {
        let entries = self.scanner().scan()?;
        Ok(self.assemble(&entries))
    }

    /// Build the flat navigation bar for this root.
    ///
    /// One entry per top-level content directory, in the same order their
    /// groups appear in the sidebar, with the same display-name rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidRoot`] if the content root is missing or
    /// not a directory.
    pub fn navbar(&self) -> Result<Vec<NavEntry>, ScanError> {
        let entries = self.scanner().scan()?;
        let mut seen = HashSet::new();
        let mut nav = Vec::new();
        for entry in &entries {
            if let Some(key) = entry.group_key()
                && seen.insert(key.clone())
            {
                nav.push(NavEntry {
                    text: self.names.display(&key),
                    link: format!("{}/{key}/", self.prefix()),
                });
            }
        }
        Ok(nav)
    }

    fn scanner(&self) -> Scanner {
        Scanner::with_options(self.root.clone(), self.options.clone())
    }

    /// Assemble the tree from a sorted document list.
    fn assemble(&self, entries: &[DocumentEntry]) -> NavigationTree {
        // Title resolution is pure per file; fan it out. Collecting an
        // indexed parallel iterator preserves input order, so assembly
        // below stays deterministic.
        let titles: Vec<Option<String>> = entries
            .par_iter()
            .map(|entry| self.resolver.resolve(&self.root.join(&entry.rel_path)))
            .collect();

        // Partition by top-level segment, keeping first-observed group order
        let mut root_docs: Vec<usize> = Vec::new();
        let mut group_order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            match entry.group_key() {
                Some(key) => {
                    if !grouped.contains_key(&key) {
                        group_order.push(key.clone());
                    }
                    grouped.entry(key).or_default().push(i);
                }
                None => root_docs.push(i),
            }
        }

        let mut seen_links = HashSet::new();
        let mut groups = Vec::new();

        let quick_start =
            self.quick_start_items(entries, &titles, &root_docs, &mut seen_links);
        if !quick_start.is_empty() {
            groups.push(NavigationGroup {
                heading: self.quick_start_heading.clone(),
                items: quick_start,
            });
        }

        for key in group_order {
            let mut items = Vec::new();
            for &i in &grouped[&key] {
                self.push_item(&mut items, &mut seen_links, &entries[i], titles[i].as_deref());
            }
            if !items.is_empty() {
                groups.push(NavigationGroup {
                    heading: self.names.display(&key),
                    items,
                });
            }
        }

        NavigationTree { groups }
    }

    /// Build the synthesized root-level group.
    ///
    /// A root `README` document becomes the overview item; failing that, a
    /// root `index` document does. Whichever of the pair was not used is
    /// still excluded from the remaining root items, which follow in sorted
    /// order.
    fn quick_start_items(
        &self,
        entries: &[DocumentEntry],
        titles: &[Option<String>],
        root_docs: &[usize],
        seen_links: &mut HashSet<String>,
    ) -> Vec<NavigationItem> {
        let stem_is = |i: usize, name: &str| entries[i].stem().eq_ignore_ascii_case(name);
        let readme = root_docs.iter().copied().find(|&i| stem_is(i, "readme"));
        let index = root_docs.iter().copied().find(|&i| stem_is(i, "index"));

        let mut items = Vec::new();
        if let Some(i) = readme.or(index) {
            self.push_item(&mut items, seen_links, &entries[i], titles[i].as_deref());
        }
        for &i in root_docs {
            if stem_is(i, "readme") || stem_is(i, "index") {
                continue;
            }
            self.push_item(&mut items, seen_links, &entries[i], titles[i].as_deref());
        }
        items
    }

    /// Append one item, dropping it when its link was already taken.
    fn push_item(
        &self,
        items: &mut Vec<NavigationItem>,
        seen_links: &mut HashSet<String>,
        entry: &DocumentEntry,
        title: Option<&str>,
    ) {
        let link = self.link_for(entry);
        if !seen_links.insert(link.clone()) {
            tracing::warn!(
                link = %link,
                path = %entry.rel_path.display(),
                "duplicate navigation link, keeping first occurrence"
            );
            return;
        }
        let title = title
            .map(str::to_owned)
            .unwrap_or_else(|| self.names.display(&entry.stem()));
        items.push(NavigationItem { title, link });
    }

    /// Canonical link for a document.
    ///
    /// Index documents map to their containing directory (trailing-slash
    /// form); everything else maps to the extensionless file path.
    fn link_for(&self, entry: &DocumentEntry) -> String {
        let mut link = self.prefix();
        link.push('/');
        if entry.is_index {
            let dir = entry
                .rel_path
                .parent()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
                .unwrap_or_default();
            if !dir.is_empty() {
                link.push_str(&dir);
                link.push('/');
            }
        } else {
            let rel = entry.rel_path.to_string_lossy().replace('\\', "/");
            // The scanner only yields `.md` files, so the suffix is fixed
            link.push_str(&rel[..rel.len() - 3]);
        }
        link
    }

    fn prefix(&self) -> String {
        if self.link_base.is_empty() {
            String::new()
        } else {
            format!("/{}", self.link_base)
        }
    }
}
