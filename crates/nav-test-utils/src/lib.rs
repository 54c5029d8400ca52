//! Testing utilities for the navigation workspace
//!
//! Shared fixtures, fake policies and context builders.

#![allow(missing_docs)]

use nav_access::AccessPolicy;
use nav_model::{Entitlements, FeatureFlag, NavContext, Role, RouteNode};
use std::collections::HashMap;

/// Policy that grants everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn can_access_module(&self, _role: Role, _module_id: &str) -> bool {
        true
    }

    fn can_access_child(&self, _role: Role, _module_id: &str, _child_id: &str) -> bool {
        true
    }
}

/// Policy that grants nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AccessPolicy for DenyAll {
    fn can_access_module(&self, _role: Role, _module_id: &str) -> bool {
        false
    }

    fn can_access_child(&self, _role: Role, _module_id: &str, _child_id: &str) -> bool {
        false
    }
}

/// Per-role allow-lists of module and child ids
///
/// A role with no entry sees nothing; an entry with no child list sees every
/// child of its modules.
#[derive(Debug, Clone, Default)]
pub struct TablePolicy {
    fallback: Option<Role>,
    modules: HashMap<Role, Vec<String>>,
    hidden_children: HashMap<Role, Vec<String>>,
}

impl TablePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fallback(mut self, role: Role) -> Self {
        self.fallback = Some(role);
        self
    }

    pub fn allow(mut self, role: Role, modules: &[&str]) -> Self {
        self.modules
            .entry(role)
            .or_default()
            .extend(modules.iter().map(|m| m.to_string()));
        self
    }

    pub fn hide(mut self, role: Role, children: &[&str]) -> Self {
        self.hidden_children
            .entry(role)
            .or_default()
            .extend(children.iter().map(|c| c.to_string()));
        self
    }
}

impl AccessPolicy for TablePolicy {
    fn fallback_role(&self) -> Role {
        self.fallback.unwrap_or(Role::Viewer)
    }

    fn can_access_module(&self, role: Role, module_id: &str) -> bool {
        self.modules
            .get(&role)
            .is_some_and(|m| m.iter().any(|id| id == module_id))
    }

    fn can_access_child(&self, role: Role, _module_id: &str, child_id: &str) -> bool {
        !self
            .hidden_children
            .get(&role)
            .is_some_and(|c| c.iter().any(|id| id == child_id))
    }
}

pub fn leaf(id: &str, label: &str, path: &str) -> RouteNode {
    RouteNode::new(id, label).with_path(path)
}

/// Small hand-built tree covering every gate kind
///
/// - `projects` (atlvs) with Overview in second position
/// - `pipeline` (core module, no flag)
/// - `opendeck`, `ghxstship` (flagged)
/// - `help` (ungated)
/// - `settings`, `profile` (always visible)
pub fn sample_tree() -> Vec<RouteNode> {
    vec![
        RouteNode::new("projects", "Projects")
            .with_flag(FeatureFlag::Atlvs)
            .with_children([
                leaf("projects-schedule", "Schedule", "/projects/schedule"),
                leaf("projects-overview", "Overview", "/projects/overview"),
                leaf("projects-tasks", "Tasks", "/projects/tasks"),
                RouteNode::new("projects-drafts", "Drafts"),
            ]),
        RouteNode::new("pipeline", "Pipeline").with_children([
            leaf("pipeline-overview", "Overview", "/pipeline"),
            leaf("pipeline-proposals", "Proposals", "/pipeline/proposals"),
        ]),
        RouteNode::new("opendeck", "OPENDECK")
            .with_flag(FeatureFlag::Opendeck)
            .with_child(leaf("opendeck-gigs", "Gigs", "/opendeck/gigs")),
        RouteNode::new("ghxstship", "GHXSTSHIP")
            .with_flag(FeatureFlag::Ghxstship)
            .with_child(leaf("ghxstship-crew", "Crew", "/ghxstship/crew")),
        RouteNode::new("help", "Help").with_path("/help"),
        RouteNode::new("settings", "Settings").with_children([
            leaf("settings-account", "Account", "/settings/account"),
            leaf("settings-billing", "Billing", "/settings/billing"),
        ]),
        RouteNode::new("profile", "Profile")
            .with_child(leaf("profile-overview", "Overview", "/profile")),
    ]
}

pub fn ids(nodes: &[RouteNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

pub fn context(role: &str, entitlements: Entitlements, projects_assigned: u32) -> NavContext {
    NavContext::new(Some(role))
        .with_entitlements(entitlements)
        .with_projects_assigned(projects_assigned)
}

pub fn all_entitlement_combinations() -> [(bool, bool); 4] {
    [(true, true), (true, false), (false, true), (false, false)]
}
