//! Path resolution
//!
//! Maps the current URL back onto the catalog for breadcrumbs and selectors.
//! Runs against the unfiltered tree: a user who lands on a page still gets a
//! trail even if the page is hidden from their sidebar.

use crate::projector::to_selector_options;
use nav_model::{RouteNode, SelectorOption};
use serde::{Deserialize, Serialize};

/// Root-to-match trail for `pathname`
///
/// Depth-first in authoring order, first exact `path` match wins. Empty when
/// no node has exactly this path.
///
/// # Example
/// ```
/// use nav_core::find_by_path;
/// use nav_model::RouteNode;
///
/// let tree = vec![RouteNode::new("finance", "Finance")
///     .with_child(RouteNode::new("finance-budgets", "Budgets").with_path("/finance/budgets"))];
///
/// let trail: Vec<&str> = find_by_path("/finance/budgets", &tree)
///     .iter()
///     .map(|n| n.id.as_str())
///     .collect();
/// assert_eq!(trail, vec!["finance", "finance-budgets"]);
/// assert!(find_by_path("/finance", &tree).is_empty());
/// ```
#[must_use]
pub fn find_by_path<'a>(pathname: &str, tree: &'a [RouteNode]) -> Vec<&'a RouteNode> {
    let mut trail = Vec::new();
    if search(pathname, tree, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

fn search<'a>(pathname: &str, nodes: &'a [RouteNode], trail: &mut Vec<&'a RouteNode>) -> bool {
    for node in nodes {
        trail.push(node);
        if node.path.as_deref() == Some(pathname) || search(pathname, &node.children, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

/// One breadcrumb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Display text
    pub label: String,
    /// Link target; containers without a path are not linkable
    pub href: Option<String>,
}

/// Breadcrumbs for the current URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumbs {
    /// Crumbs from the root down
    pub crumbs: Vec<Breadcrumb>,
    /// Whether the crumbs came from the catalog rather than URL segments
    pub resolved: bool,
    /// Navigable siblings of the last crumb, for the selector dropdown
    pub siblings: Vec<SelectorOption>,
}

/// Build breadcrumbs for `pathname`
///
/// Uses the catalog trail when there is one. Otherwise each non-empty URL
/// segment becomes a crumb, labelled by title-casing the segment and linked
/// to the cumulative path.
#[must_use]
pub fn breadcrumbs(pathname: &str, tree: &[RouteNode]) -> Breadcrumbs {
    let trail = find_by_path(pathname, tree);
    if trail.is_empty() {
        return Breadcrumbs {
            crumbs: segment_crumbs(pathname),
            resolved: false,
            siblings: Vec::new(),
        };
    }

    let siblings = trail
        .len()
        .checked_sub(2)
        .map(|i| to_selector_options(trail[i]))
        .unwrap_or_default();

    Breadcrumbs {
        crumbs: trail
            .iter()
            .map(|node| Breadcrumb {
                label: node.label.clone(),
                href: node.path.clone(),
            })
            .collect(),
        resolved: true,
        siblings,
    }
}

fn segment_crumbs(pathname: &str) -> Vec<Breadcrumb> {
    let path = pathname.split(['?', '#']).next().unwrap_or_default();
    let mut href = String::new();

    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            href.push('/');
            href.push_str(segment);
            Breadcrumb {
                label: title_case(segment),
                href: Some(href.clone()),
            }
        })
        .collect()
}

fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<RouteNode> {
        vec![
            RouteNode::new("a", "A").with_path("/a").with_children([
                RouteNode::new("a-1", "A1").with_path("/a/1"),
                RouteNode::new("a-2", "A2").with_children([
                    RouteNode::new("a-2-x", "X").with_path("/a/2/x"),
                ]),
            ]),
            RouteNode::new("b", "B").with_child(RouteNode::new("b-1", "B1").with_path("/a/1")),
        ]
    }

    fn trail_ids<'a>(trail: &[&'a RouteNode]) -> Vec<&'a str> {
        trail.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn matches_container_with_path() {
        assert_eq!(trail_ids(&find_by_path("/a", &tree())), vec!["a"]);
    }

    #[test]
    fn matches_deep_leaf() {
        assert_eq!(trail_ids(&find_by_path("/a/2/x", &tree())), vec!["a", "a-2", "a-2-x"]);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(trail_ids(&find_by_path("/a/1", &tree())), vec!["a", "a-1"]);
    }

    #[test]
    fn exact_match_only() {
        assert!(find_by_path("/a/", &tree()).is_empty());
        assert!(find_by_path("/a/2", &tree()).is_empty());
        assert!(find_by_path("", &tree()).is_empty());
    }

    #[test]
    fn breadcrumbs_from_trail() {
        let crumbs = breadcrumbs("/a/2/x", &tree());
        assert!(crumbs.resolved);
        assert_eq!(
            crumbs.crumbs,
            vec![
                Breadcrumb { label: "A".into(), href: Some("/a".into()) },
                Breadcrumb { label: "A2".into(), href: None },
                Breadcrumb { label: "X".into(), href: Some("/a/2/x".into()) },
            ]
        );
        assert_eq!(crumbs.siblings.len(), 1);
        assert_eq!(crumbs.siblings[0].id, "a-2-x");
    }

    #[test]
    fn breadcrumbs_top_level_has_no_siblings() {
        let crumbs = breadcrumbs("/a", &tree());
        assert!(crumbs.resolved);
        assert!(crumbs.siblings.is_empty());
    }

    #[test]
    fn breadcrumbs_fall_back_to_segments() {
        let crumbs = breadcrumbs("/projects/load-in_plan/42?tab=files", &tree());
        assert!(!crumbs.resolved);
        let labels: Vec<&str> = crumbs.crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Projects", "Load In Plan", "42"]);
        assert_eq!(crumbs.crumbs[2].href.as_deref(), Some("/projects/load-in_plan/42"));
    }

    #[test]
    fn breadcrumbs_root() {
        let crumbs = breadcrumbs("/", &tree());
        assert!(!crumbs.resolved);
        assert!(crumbs.crumbs.is_empty());
    }
}
