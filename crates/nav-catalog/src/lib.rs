//! Navigation Route Catalog
//!
//! The static, hierarchical catalog of application modules and sub-pages.
//!
//! The catalog is authored as YAML (`catalog/routes.yaml`) and compiled into
//! the binary; deployments may point at a replacement file instead. Either
//! way it is validated once at load and immutable afterwards.
//!
//! # Example
//!
//! ```rust
//! use nav_catalog::RouteCatalog;
//!
//! let catalog = RouteCatalog::embedded();
//! let projects = catalog.module("projects").unwrap();
//! assert!(projects.child("projects-overview").is_some());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;

// Re-exports for convenience
pub use catalog::{validate, RouteCatalog, EMBEDDED_ROUTES};
pub use error::{CatalogError, CatalogResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
