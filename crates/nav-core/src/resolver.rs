//! Per-request navigation resolver
//!
//! [`NavigationResolver`] ties the stages together: entitlement gating, role
//! rules, then projection. It holds only shared immutable data, so one
//! instance serves every request.

use crate::config::NavConfig;
use crate::error::NavResult;
use crate::palette::palette_commands;
use crate::path::{breadcrumbs, find_by_path, Breadcrumbs};
use crate::projector::to_nav_sections;
use nav_access::{apply_role_rules, filter_by_entitlement_set, AccessPolicy, MatrixPolicy};
use nav_catalog::RouteCatalog;
use nav_model::{NavContext, NavSection, PaletteCommand, Role, RouteNode};
use std::sync::Arc;

/// Resolves navigation for a request context
///
/// # Example
/// ```
/// use nav_core::NavigationResolver;
/// use nav_model::NavContext;
///
/// let resolver = NavigationResolver::embedded();
/// let sections = resolver.sections(&NavContext::new(Some("viewer")));
///
/// let projects = sections.iter().find(|s| s.label == "Projects").unwrap();
/// assert_eq!(projects.item_labels(), vec!["Overview"]);
/// ```
#[derive(Debug, Clone)]
pub struct NavigationResolver<P = MatrixPolicy> {
    catalog: Arc<RouteCatalog>,
    policy: P,
}

impl<P: AccessPolicy> NavigationResolver<P> {
    /// Create resolver over a catalog and policy
    #[must_use]
    pub fn new(catalog: Arc<RouteCatalog>, policy: P) -> Self {
        Self { catalog, policy }
    }

    /// The unfiltered catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// The injected policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Role the context resolves to under this policy
    #[must_use]
    pub fn role_for(&self, ctx: &NavContext) -> Role {
        self.policy
            .normalize_role(ctx.role.as_deref().unwrap_or_default())
    }

    /// Entitlement gate, role rules and project narrowing
    #[must_use]
    pub fn filtered_tree(&self, ctx: &NavContext) -> Vec<RouteNode> {
        let licensed = filter_by_entitlement_set(self.catalog.nodes(), &ctx.entitlements);
        let visible = apply_role_rules(&licensed, ctx, &self.policy);
        tracing::debug!(
            "Resolved navigation for {}: {} of {} modules",
            self.role_for(ctx),
            visible.len(),
            self.catalog.len()
        );
        visible
    }

    /// Sidebar sections for the context
    #[must_use]
    pub fn sections(&self, ctx: &NavContext) -> Vec<NavSection> {
        to_nav_sections(&self.filtered_tree(ctx))
    }

    /// Palette commands for the context
    #[must_use]
    pub fn commands(&self, ctx: &NavContext) -> Vec<PaletteCommand> {
        palette_commands(&self.sections(ctx))
    }

    /// Catalog trail for a URL; empty when nothing matches
    ///
    /// Resolved against the whole catalog, not the caller's filtered view.
    #[must_use]
    pub fn trail(&self, pathname: &str) -> Vec<&RouteNode> {
        find_by_path(pathname, self.catalog.nodes())
    }

    /// Breadcrumbs for a URL
    #[must_use]
    pub fn breadcrumbs(&self, pathname: &str) -> Breadcrumbs {
        breadcrumbs(pathname, self.catalog.nodes())
    }
}

impl NavigationResolver<MatrixPolicy> {
    /// Embedded catalog with the embedded role matrix
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            Arc::new(RouteCatalog::embedded().clone()),
            MatrixPolicy::embedded().clone(),
        )
    }

    /// Build from configuration
    ///
    /// Loads the configured catalog and matrix (embedded when unset), applies
    /// the fallback override, and checks that the matrix only names ids that
    /// exist in the catalog.
    ///
    /// # Errors
    /// Any [`crate::NavError`] raised while loading,
    /// [`nav_access::PolicyError::UnrestrictedFallback`] for a fallback
    /// override that is not restricted, or
    /// [`nav_access::PolicyError::UnknownReference`] from the reference check.
    pub fn from_config(config: &NavConfig) -> NavResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => RouteCatalog::from_path(path)?,
            None => RouteCatalog::embedded().clone(),
        };

        let mut policy = match &config.policy_path {
            Some(path) => MatrixPolicy::from_path(path)?,
            None => MatrixPolicy::embedded().clone(),
        };
        if let Some(role) = config.fallback_role {
            policy = policy.with_fallback(role)?;
        }

        policy.check_references(catalog.nodes())?;
        tracing::debug!(
            "Navigation resolver ready: {} modules, {} roles",
            catalog.len(),
            policy.roles().count()
        );

        Ok(Self::new(Arc::new(catalog), policy))
    }
}
