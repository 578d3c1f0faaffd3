//! Content-tree discovery and title resolution for sidemap.
//!
//! This crate provides the discovery half of the navigation pipeline:
//!
//! - [`Scanner`]: walks a content root and returns every markdown document
//!   beneath it as a sorted list of [`DocumentEntry`] values
//! - [`TitleResolver`]: extracts a display title from a document (first H1
//!   heading, then a frontmatter `title:` key), best-effort
//! - [`humanize`]: the filename-stem fallback used when no title can be
//!   extracted
//!
//! # Architecture
//!
//! Scanning and title resolution are deliberately separate: the scanner is a
//! pure function of filesystem state (no iteration state survives a call),
//! while the resolver keeps an internal mtime cache so repeated builds skip
//! unchanged files. Neither reads the other's state, which lets callers fan
//! out title resolution across worker threads.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use sidemap_scan::{Scanner, TitleResolver};
//!
//! let scanner = Scanner::new(PathBuf::from("docs"));
//! let resolver = TitleResolver::new();
//! for entry in scanner.scan()? {
//!     let title = resolver.resolve(&PathBuf::from("docs").join(&entry.rel_path));
//!     println!("{}: {title:?}", entry.rel_path.display());
//! }
//! ```

mod entry;
mod title;
mod walker;

pub use entry::{DocumentEntry, name_cmp, path_cmp};
pub use title::{TitleResolver, humanize};
pub use walker::{ScanError, ScanOptions, Scanner};
