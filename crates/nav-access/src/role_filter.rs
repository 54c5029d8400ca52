//! Role gating of modules and sub-pages
//!
//! [`apply_role_rules`] is the single place the role-dependent rules run:
//! the policy filter followed by the project-assignment narrowing. Callers
//! should go through it rather than composing the steps themselves.

use crate::policy::AccessPolicy;
use nav_model::{NavContext, Role, RouteNode, OVERVIEW_LABEL};

/// Module the narrowing rule applies to
pub const PROJECTS_MODULE: &str = "projects";

/// Filter a tree for a raw role string
///
/// The role is normalized through the policy first, so unknown strings are
/// filtered as the policy's fallback role.
#[must_use]
pub fn filter_by_role<P>(tree: &[RouteNode], role: &str, policy: &P) -> Vec<RouteNode>
where
    P: AccessPolicy + ?Sized,
{
    filter_for_role(tree, policy.normalize_role(role), policy)
}

/// Filter a tree for an already-normalized role
#[must_use]
pub fn filter_for_role<P>(tree: &[RouteNode], role: Role, policy: &P) -> Vec<RouteNode>
where
    P: AccessPolicy + ?Sized,
{
    tree.iter()
        .filter(|module| policy.can_access_module(role, &module.id))
        .map(|module| RouteNode {
            id: module.id.clone(),
            label: module.label.clone(),
            path: module.path.clone(),
            feature_flag: module.feature_flag,
            children: module
                .children
                .iter()
                .filter(|child| policy.can_access_child(role, &module.id, &child.id))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Collapse Projects to its Overview for unassigned restricted roles
///
/// Applies only when `projects_assigned_count == 0` and `role` is restricted.
/// When Projects has no Overview child it is left with no children.
#[must_use]
pub fn narrow_projects(
    mut tree: Vec<RouteNode>,
    role: Role,
    projects_assigned_count: u32,
) -> Vec<RouteNode> {
    if projects_assigned_count > 0 || !role.is_restricted() {
        return tree;
    }

    if let Some(projects) = tree.iter_mut().find(|n| n.id == PROJECTS_MODULE) {
        let before = projects.children.len();
        projects.children.retain(|c| c.label == OVERVIEW_LABEL);
        projects.children.truncate(1);
        tracing::debug!(
            "Narrowed projects for unassigned {}: {} -> {} sub-pages",
            role,
            before,
            projects.children.len()
        );
    }
    tree
}

/// Role filter followed by project narrowing, for one request
#[must_use]
pub fn apply_role_rules<P>(tree: &[RouteNode], ctx: &NavContext, policy: &P) -> Vec<RouteNode>
where
    P: AccessPolicy + ?Sized,
{
    let role = policy.normalize_role(ctx.role.as_deref().unwrap_or_default());
    let filtered = filter_for_role(tree, role, policy);
    narrow_projects(filtered, role, ctx.projects_assigned_count)
}
