//! Navigation Access Control
//!
//! Entitlement and role gating over the route tree.
//!
//! # Pipeline
//!
//! ```text
//! RouteNode tree → EntitlementFilter → RoleFilter → project narrowing → filtered tree
//!                        ↑                  ↑
//!                   Entitlements      AccessPolicy (injected)
//! ```
//!
//! Every stage is a pure function returning a new tree; the input is never
//! mutated.
//!
//! # Example
//!
//! ```rust
//! use nav_access::{apply_role_rules, filter_by_entitlement_set, MatrixPolicy};
//! use nav_catalog::RouteCatalog;
//! use nav_model::NavContext;
//!
//! let ctx = NavContext::new(Some("viewer"));
//! let licensed = filter_by_entitlement_set(RouteCatalog::embedded().nodes(), &ctx.entitlements);
//! let visible = apply_role_rules(&licensed, &ctx, MatrixPolicy::embedded());
//!
//! assert!(visible.iter().any(|n| n.id == "profile"));
//! assert!(!visible.iter().any(|n| n.id == "finance"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod entitlement;
pub mod error;
pub mod policy;
pub mod role_filter;

// Re-exports for convenience
pub use entitlement::{
    filter_by_entitlement_set, filter_by_entitlements, is_entitled, ALWAYS_VISIBLE,
    ATLVS_CORE_MODULES,
};
pub use error::{ensure_restricted_fallback, PolicyError, PolicyResult};
pub use policy::{AccessPolicy, MatrixPolicy, ModuleScope, RoleGrant, EMBEDDED_POLICY};
pub use role_filter::{
    apply_role_rules, filter_by_role, filter_for_role, narrow_projects, PROJECTS_MODULE,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for gating navigation
    pub use crate::{
        apply_role_rules, filter_by_entitlement_set, filter_by_entitlements, filter_by_role,
        AccessPolicy, MatrixPolicy,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
