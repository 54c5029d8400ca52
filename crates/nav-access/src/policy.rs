//! Access policy
//!
//! [`AccessPolicy`] is the capability table the role filter consults. It is
//! injected rather than global so filters can run against fakes.
//!
//! [`MatrixPolicy`] is the shipped implementation: a declarative role matrix
//! authored in YAML (`policy/roles.yaml`) and compiled into the binary.

use crate::error::{ensure_restricted_fallback, PolicyError, PolicyResult};
use indexmap::IndexMap;
use nav_model::{walk, Role, RouteNode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Role matrix source compiled into the binary
pub const EMBEDDED_POLICY: &str = include_str!("../policy/roles.yaml");

static EMBEDDED: Lazy<MatrixPolicy> = Lazy::new(|| {
    MatrixPolicy::from_yaml_str(EMBEDDED_POLICY).expect("embedded role matrix is valid")
});

/// Capability table consulted by the role filter
///
/// Implementations must be pure: the same inputs always give the same answer.
#[cfg_attr(test, mockall::automock)]
pub trait AccessPolicy: Send + Sync {
    /// Role substituted for unknown or missing role strings
    fn fallback_role(&self) -> Role {
        Role::Viewer
    }

    /// Map a raw role string to a canonical role, never failing
    fn normalize_role(&self, raw: &str) -> Role {
        Role::normalize(Some(raw), self.fallback_role())
    }

    /// Whether `role` may open the top-level module `module_id`
    fn can_access_module(&self, role: Role, module_id: &str) -> bool;

    /// Whether `role` may open sub-page `child_id` of `module_id`
    fn can_access_child(&self, role: Role, module_id: &str, child_id: &str) -> bool;
}

impl<P: AccessPolicy + ?Sized> AccessPolicy for &P {
    fn fallback_role(&self) -> Role {
        (**self).fallback_role()
    }

    fn normalize_role(&self, raw: &str) -> Role {
        (**self).normalize_role(raw)
    }

    fn can_access_module(&self, role: Role, module_id: &str) -> bool {
        (**self).can_access_module(role, module_id)
    }

    fn can_access_child(&self, role: Role, module_id: &str, child_id: &str) -> bool {
        (**self).can_access_child(role, module_id, child_id)
    }
}

impl<P: AccessPolicy + ?Sized> AccessPolicy for Arc<P> {
    fn fallback_role(&self) -> Role {
        (**self).fallback_role()
    }

    fn normalize_role(&self, raw: &str) -> Role {
        (**self).normalize_role(raw)
    }

    fn can_access_module(&self, role: Role, module_id: &str) -> bool {
        (**self).can_access_module(role, module_id)
    }

    fn can_access_child(&self, role: Role, module_id: &str, child_id: &str) -> bool {
        (**self).can_access_child(role, module_id, child_id)
    }
}

/// Which modules a role may open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScope", into = "RawScope")]
pub enum ModuleScope {
    /// Every module (`"*"`)
    All,
    /// Only the listed module ids
    Only(BTreeSet<String>),
}

impl ModuleScope {
    /// Whether the scope admits `module_id`
    #[inline]
    #[must_use]
    pub fn contains(&self, module_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.contains(module_id),
        }
    }
}

impl Default for ModuleScope {
    fn default() -> Self {
        Self::Only(BTreeSet::new())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawScope {
    Wildcard(String),
    List(Vec<String>),
}

impl TryFrom<RawScope> for ModuleScope {
    type Error = PolicyError;

    fn try_from(raw: RawScope) -> Result<Self, Self::Error> {
        match raw {
            RawScope::Wildcard(s) if s == "*" => Ok(Self::All),
            RawScope::Wildcard(s) => Err(PolicyError::InvalidModuleScope(s)),
            RawScope::List(ids) => Ok(Self::Only(ids.into_iter().collect())),
        }
    }
}

impl From<ModuleScope> for RawScope {
    fn from(scope: ModuleScope) -> Self {
        match scope {
            ModuleScope::All => Self::Wildcard("*".to_string()),
            ModuleScope::Only(ids) => Self::List(ids.into_iter().collect()),
        }
    }
}

/// Capabilities granted to one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleGrant {
    /// Reachable modules
    #[serde(default)]
    pub modules: ModuleScope,

    /// Sub-pages hidden in every module
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub deny_children: BTreeSet<String>,

    /// Per-module whitelist of sub-pages
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub allow_children: IndexMap<String, BTreeSet<String>>,
}

impl RoleGrant {
    /// Whether the grant admits `child_id` under `module_id`
    #[must_use]
    pub fn admits_child(&self, module_id: &str, child_id: &str) -> bool {
        if self.deny_children.contains(child_id) {
            return false;
        }
        self.allow_children
            .get(module_id)
            .map_or(true, |allowed| allowed.contains(child_id))
    }

    fn referenced_ids(&self) -> impl Iterator<Item = &str> {
        let modules: Vec<&str> = match &self.modules {
            ModuleScope::All => Vec::new(),
            ModuleScope::Only(ids) => ids.iter().map(String::as_str).collect(),
        };
        modules
            .into_iter()
            .chain(self.deny_children.iter().map(String::as_str))
            .chain(self.allow_children.iter().flat_map(|(module, children)| {
                std::iter::once(module.as_str()).chain(children.iter().map(String::as_str))
            }))
    }
}

/// Declarative role matrix
///
/// # Example
/// ```
/// use nav_access::{AccessPolicy, MatrixPolicy};
/// use nav_model::Role;
///
/// let policy = MatrixPolicy::embedded();
/// assert!(policy.can_access_module(Role::Owner, "finance"));
/// assert!(!policy.can_access_module(Role::Viewer, "finance"));
/// assert_eq!(policy.normalize_role("who-knows"), Role::Viewer);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixPolicy {
    #[serde(default)]
    fallback_role: Role,

    #[serde(default)]
    roles: IndexMap<Role, RoleGrant>,
}

impl MatrixPolicy {
    /// Empty matrix: every role is denied everything
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a matrix from YAML
    ///
    /// # Errors
    /// [`PolicyError::Syntax`] when the YAML does not match the schema,
    /// including unknown keys. [`PolicyError::UnrestrictedFallback`] when the
    /// fallback role is not restricted.
    pub fn from_yaml_str(source: &str) -> PolicyResult<Self> {
        let policy: Self = serde_yaml::from_str(source)?;
        ensure_restricted_fallback(policy.fallback_role)?;
        Ok(policy)
    }

    /// Load a matrix from a YAML file
    ///
    /// # Errors
    /// [`PolicyError::Io`] when the file cannot be read, otherwise see
    /// [`MatrixPolicy::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> PolicyResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| PolicyError::io_error(path, e))?;
        let policy = Self::from_yaml_str(&source)?;
        tracing::debug!(
            "Loaded role matrix from {}: {} roles",
            path.display(),
            policy.roles.len()
        );
        Ok(policy)
    }

    /// The matrix compiled into the binary
    #[must_use]
    pub fn embedded() -> &'static MatrixPolicy {
        &EMBEDDED
    }

    /// With fallback role
    ///
    /// # Errors
    /// [`PolicyError::UnrestrictedFallback`] unless `role` is restricted.
    pub fn with_fallback(mut self, role: Role) -> PolicyResult<Self> {
        self.fallback_role = ensure_restricted_fallback(role)?;
        Ok(self)
    }

    /// Set or replace a role's grant
    #[inline]
    #[must_use]
    pub fn with_grant(mut self, role: Role, grant: RoleGrant) -> Self {
        self.roles.insert(role, grant);
        self
    }

    /// Grant for a role, if any
    #[inline]
    #[must_use]
    pub fn grant(&self, role: Role) -> Option<&RoleGrant> {
        self.roles.get(&role)
    }

    /// Roles in authoring order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.keys().copied()
    }

    /// Check that every id the matrix names exists in `tree`
    ///
    /// # Errors
    /// [`PolicyError::UnknownReference`] for the first id not found.
    pub fn check_references(&self, tree: &[RouteNode]) -> PolicyResult<()> {
        let known: HashSet<&str> = walk(tree).map(|(_, n)| n.id.as_str()).collect();

        for (role, grant) in &self.roles {
            if let Some(id) = grant.referenced_ids().find(|id| !known.contains(id)) {
                tracing::warn!("Role matrix entry for {} names unknown id '{}'", role, id);
                return Err(PolicyError::UnknownReference {
                    role: *role,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl AccessPolicy for MatrixPolicy {
    fn fallback_role(&self) -> Role {
        self.fallback_role
    }

    fn can_access_module(&self, role: Role, module_id: &str) -> bool {
        self.roles
            .get(&role)
            .is_some_and(|grant| grant.modules.contains(module_id))
    }

    fn can_access_child(&self, role: Role, module_id: &str, child_id: &str) -> bool {
        self.roles
            .get(&role)
            .is_some_and(|grant| grant.admits_child(module_id, child_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_matrix_loads() {
        let policy = MatrixPolicy::embedded();
        assert_eq!(policy.fallback_role(), Role::Viewer);
        assert_eq!(policy.roles().count(), Role::ALL.len());
    }

    #[test]
    fn wildcard_scope() {
        let policy = MatrixPolicy::embedded();
        assert!(policy.can_access_module(Role::Admin, "anything-at-all"));
        assert!(policy.can_access_child(Role::Admin, "settings", "settings-billing"));
    }

    #[test]
    fn deny_children_apply_in_any_module() {
        let policy = MatrixPolicy::embedded();
        assert!(policy.can_access_module(Role::Manager, "settings"));
        assert!(!policy.can_access_child(Role::Manager, "settings", "settings-billing"));
        assert!(policy.can_access_child(Role::Manager, "settings", "settings-teams"));
    }

    #[test]
    fn allow_children_whitelist() {
        let policy = MatrixPolicy::embedded();
        assert!(policy.can_access_child(Role::Client, "finance", "finance-invoices"));
        assert!(!policy.can_access_child(Role::Client, "finance", "finance-budgets"));
        // No whitelist for projects: everything not denied passes.
        assert!(policy.can_access_child(Role::Client, "projects", "projects-tasks"));
    }

    #[test]
    fn missing_role_is_denied() {
        let policy = MatrixPolicy::new().with_grant(
            Role::Owner,
            RoleGrant {
                modules: ModuleScope::All,
                ..RoleGrant::default()
            },
        );
        assert!(policy.can_access_module(Role::Owner, "finance"));
        assert!(!policy.can_access_module(Role::Viewer, "finance"));
        assert!(!policy.can_access_child(Role::Viewer, "finance", "finance-overview"));
    }

    #[test]
    fn normalize_uses_fallback() {
        let policy = MatrixPolicy::new().with_fallback(Role::Client).unwrap();
        assert_eq!(policy.normalize_role("totally-bogus-role"), Role::Client);
        assert_eq!(policy.normalize_role("Admin"), Role::Admin);
    }

    #[test]
    fn invalid_wildcard_rejected() {
        let err = MatrixPolicy::from_yaml_str("roles:\n  owner:\n    modules: all\n").unwrap_err();
        assert!(err.to_string().contains("invalid module scope"));
    }

    #[test]
    fn unknown_role_key_rejected() {
        let result = MatrixPolicy::from_yaml_str("roles:\n  wizard:\n    modules: \"*\"\n");
        assert!(matches!(result, Err(PolicyError::Syntax(_))));
    }

    #[test]
    fn misspelled_grant_key_rejected() {
        let result = MatrixPolicy::from_yaml_str(concat!(
            "roles:\n",
            "  client:\n",
            "    modules: [settings]\n",
            "    allow_childen: {settings: [settings-overview]}\n",
        ));
        assert!(matches!(result, Err(PolicyError::Syntax(_))));
    }

    #[test]
    fn misspelled_top_level_key_rejected() {
        let result = MatrixPolicy::from_yaml_str("fallback: viewer\nroles: {}\n");
        assert!(matches!(result, Err(PolicyError::Syntax(_))));
    }

    #[test]
    fn unrestricted_fallback_rejected() {
        let result = MatrixPolicy::from_yaml_str("fallback_role: owner\nroles: {}\n");
        assert!(matches!(
            result,
            Err(PolicyError::UnrestrictedFallback { role: Role::Owner })
        ));
        assert!(MatrixPolicy::new().with_fallback(Role::Admin).is_err());
    }

    #[test]
    fn yaml_roundtrip_preserves_role_order() {
        let policy = MatrixPolicy::embedded();
        let yaml = serde_yaml::to_string(policy).unwrap();
        let back = MatrixPolicy::from_yaml_str(&yaml).unwrap();

        assert_eq!(&back, policy);
        assert_eq!(back.roles().collect::<Vec<_>>(), policy.roles().collect::<Vec<_>>());
    }

    #[test]
    fn check_references_reports_unknown_id() {
        let tree = vec![RouteNode::new("finance", "Finance")
            .with_child(RouteNode::new("finance-overview", "Overview").with_path("/finance"))];
        let ok = MatrixPolicy::from_yaml_str(
            "roles:\n  client:\n    modules: [finance]\n    \
             allow_children:\n      finance: [finance-overview]\n",
        )
        .unwrap();
        assert!(ok.check_references(&tree).is_ok());

        let bad = MatrixPolicy::from_yaml_str(
            "roles:\n  client:\n    modules: [finance]\n    deny_children: [finance-ghost]\n",
        )
        .unwrap();
        let err = bad.check_references(&tree).unwrap_err();
        assert!(matches!(
            err,
            PolicyError::UnknownReference { role: Role::Client, ref id } if id == "finance-ghost"
        ));
    }

    #[test]
    fn mock_policy_through_reference() {
        let mut mock = MockAccessPolicy::new();
        mock.expect_can_access_module()
            .returning(|role, module| role == Role::Vendor && module == "jobs");

        let by_ref: &dyn AccessPolicy = &mock;
        assert!(by_ref.can_access_module(Role::Vendor, "jobs"));
        assert!(!by_ref.can_access_module(Role::Vendor, "finance"));
    }
}
