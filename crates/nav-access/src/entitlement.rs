//! Entitlement gating of top-level modules
//!
//! A module survives when it is always visible, when one of the licenses
//! gating it is enabled, or when nothing gates it. Children are left alone;
//! sub-page access is the role filter's business.

use nav_model::{Entitlements, FeatureFlag, RouteNode};

/// Modules shown regardless of license
pub const ALWAYS_VISIBLE: [&str; 2] = ["settings", "profile"];

/// Modules gated by ATLVS even when authored without a flag
pub const ATLVS_CORE_MODULES: [&str; 11] = [
    "dashboard",
    "projects",
    "people",
    "programming",
    "pipeline",
    "procurement",
    "jobs",
    "companies",
    "finance",
    "analytics",
    "resources",
];

/// Whether a top-level node passes the entitlement gate
#[must_use]
pub fn is_entitled(node: &RouteNode, entitlements: &Entitlements) -> bool {
    let id = node.id.as_str();
    if ALWAYS_VISIBLE.contains(&id) {
        return true;
    }

    let atlvs_gated =
        node.feature_flag == Some(FeatureFlag::Atlvs) || ATLVS_CORE_MODULES.contains(&id);
    let ghxstship_gated = node.feature_flag == Some(FeatureFlag::Ghxstship);
    let opendeck_gated = node.feature_flag == Some(FeatureFlag::Opendeck);

    if !(atlvs_gated || ghxstship_gated || opendeck_gated) {
        return true;
    }

    (atlvs_gated && entitlements.atlvs)
        || (ghxstship_gated && entitlements.ghxstship)
        || (opendeck_gated && entitlements.opendeck)
}

/// Drop modules the organization is not licensed for
///
/// OPENDECK-gated modules never pass this form; use
/// [`filter_by_entitlement_set`] to honor the marketplace license.
#[must_use]
pub fn filter_by_entitlements(
    tree: &[RouteNode],
    atlvs_enabled: bool,
    ghxstship_enabled: bool,
) -> Vec<RouteNode> {
    filter_by_entitlement_set(tree, &Entitlements::new(atlvs_enabled, false, ghxstship_enabled))
}

/// Drop modules the organization is not licensed for, all licenses considered
#[must_use]
pub fn filter_by_entitlement_set(
    tree: &[RouteNode],
    entitlements: &Entitlements,
) -> Vec<RouteNode> {
    tree.iter()
        .filter(|node| is_entitled(node, entitlements))
        .cloned()
        .collect()
}
