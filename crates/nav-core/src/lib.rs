//! Navigation Core
//!
//! Turns the filtered route tree into what the UI renders, and maps URLs
//! back onto the catalog.
//!
//! # Modules
//!
//! - [`path`]: trail lookup and breadcrumbs
//! - [`projector`]: sidebar sections and selector options
//! - [`palette`]: command palette entries
//! - [`resolver`]: the per-request entry point
//! - [`config`]: TOML configuration
//!
//! # Example
//!
//! ```rust
//! use nav_core::NavigationResolver;
//! use nav_model::{Entitlements, NavContext};
//!
//! let resolver = NavigationResolver::embedded();
//! let ctx = NavContext::new(Some("admin"))
//!     .with_entitlements(Entitlements::new(true, false, true));
//!
//! let labels: Vec<String> = resolver.sections(&ctx).into_iter().map(|s| s.label).collect();
//! assert!(labels.contains(&"GHXSTSHIP".to_string()));
//! assert!(!labels.contains(&"OPENDECK".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod palette;
pub mod path;
pub mod projector;
pub mod resolver;

// Re-exports for convenience
pub use config::{NavConfig, DEFAULT_LOG_FILTER};
pub use error::{NavError, NavResult};
pub use palette::{command_id, palette_commands};
pub use path::{breadcrumbs, find_by_path, Breadcrumb, Breadcrumbs};
pub use projector::{to_nav_sections, to_selector_options};
pub use resolver::NavigationResolver;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for resolving navigation
    pub use crate::{find_by_path, to_nav_sections, NavConfig, NavigationResolver};
    pub use nav_model::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
