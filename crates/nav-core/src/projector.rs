//! Projection of the filtered tree into UI shapes
//!
//! No filtering happens here; callers pass a tree that has already been
//! through the entitlement and role stages.

use nav_model::{NavItem, NavSection, RouteNode, SelectorOption, PLACEHOLDER_HREF};

/// One section per top-level node, Overview first
///
/// Items keep authoring order except that any item labelled exactly
/// `Overview` moves to the front. The sort is stable.
#[must_use]
pub fn to_nav_sections(tree: &[RouteNode]) -> Vec<NavSection> {
    tree.iter()
        .map(|module| {
            let mut items: Vec<NavItem> = module
                .children
                .iter()
                .map(|child| {
                    NavItem::new(
                        child.label.clone(),
                        child.path.as_deref().unwrap_or(PLACEHOLDER_HREF),
                    )
                })
                .collect();
            items.sort_by_key(|item| !item.is_overview());

            NavSection {
                label: module.label.clone(),
                items,
            }
        })
        .collect()
}

/// Navigable children of `node` as dropdown options, authoring order
#[must_use]
pub fn to_selector_options(node: &RouteNode) -> Vec<SelectorOption> {
    node.children
        .iter()
        .filter_map(|child| {
            child.path.as_ref().map(|path| SelectorOption {
                id: child.id.clone(),
                label: child.label.clone(),
                href: path.clone(),
            })
        })
        .collect()
}
