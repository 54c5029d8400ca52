//! Navigation Model
//!
//! Data types shared by every stage of the navigation access resolver.
//!
//! # Overview
//!
//! - **RouteNode**: one module or sub-page of the static catalog
//! - **Role**: canonical organizational role with alias normalization
//! - **NavContext**: per-request role, entitlements and assignment count
//! - **NavSection**: the flattened sidebar projection
//!
//! # Example
//!
//! ```rust
//! use nav_model::{walk, FeatureFlag, RouteNode};
//!
//! let tree = vec![RouteNode::new("finance", "Finance")
//!     .with_flag(FeatureFlag::Atlvs)
//!     .with_child(RouteNode::new("finance-overview", "Overview").with_path("/finance"))];
//!
//! let ids: Vec<&str> = walk(&tree).map(|(_, n)| n.id.as_str()).collect();
//! assert_eq!(ids, vec!["finance", "finance-overview"]);
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod role;
pub mod route;
pub mod section;

// Re-exports
pub use context::{Entitlements, NavContext};
pub use role::{Role, RESTRICTED_ROLES};
pub use route::{walk, FeatureFlag, RouteNode, Walk};
pub use section::{
    NavItem, NavSection, PaletteCommand, SelectorOption, OVERVIEW_LABEL, PLACEHOLDER_HREF,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for navigation types
    pub use crate::{
        Entitlements, FeatureFlag, NavContext, NavItem, NavSection, PaletteCommand, Role,
        RouteNode, SelectorOption,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
