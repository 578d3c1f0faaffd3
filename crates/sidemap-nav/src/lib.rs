//! Navigation tree assembly for sidemap.
//!
//! This crate turns a scanned documentation tree into the navigation model a
//! rendering layer consumes:
//!
//! - [`NavBuilder`]: sidebar tree + navbar for one content root
//! - [`SiteMapBuilder`]: per-collection sidebars + navbar for a root holding
//!   several handbooks
//! - [`NavigationTree`] / [`NavEntry`]: the serializable output model
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use sidemap_nav::{NameTable, NavBuilder};
//!
//! let names: NameTable = [("guide".to_owned(), "Guide".to_owned())]
//!     .into_iter()
//!     .collect();
//! let builder = NavBuilder::new(PathBuf::from("docs")).with_names(names);
//!
//! let sidebar = builder.build()?;
//! let navbar = builder.navbar()?;
//! # let _ = (sidebar, navbar);
//! # Ok(())
//! # }
//! ```

mod builder;
mod names;
mod sitemap;
mod tree;

pub use builder::NavBuilder;
pub use names::NameTable;
pub use sitemap::{CollectionNav, SiteMap, SiteMapBuilder};
pub use tree::{NavEntry, NavigationGroup, NavigationItem, NavigationTree};

// Re-export the scan error so callers only need this crate for builds
pub use sidemap_scan::ScanError;
