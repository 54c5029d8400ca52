//! Route tree nodes
//!
//! Provides [`RouteNode`], one entry of the static navigation catalog, and
//! [`FeatureFlag`], the license tag that gates a top-level section.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// License entitlement tag carried by a gated section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureFlag {
    /// Core production-management suite
    Atlvs,
    /// Marketplace
    Opendeck,
    /// Agency experiences
    Ghxstship,
}

impl FeatureFlag {
    /// Lowercase tag as authored in the catalog
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atlvs => "atlvs",
            Self::Opendeck => "opendeck",
            Self::Ghxstship => "ghxstship",
        }
    }
}

impl Display for FeatureFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the navigation catalog
///
/// Top-level nodes are application modules, their children are sub-pages.
/// `path` is only present on navigable nodes; a container may carry one too.
///
/// # Example
/// ```
/// use nav_model::RouteNode;
///
/// let overview = RouteNode::new("projects-overview", "Overview").with_path("/projects/overview");
/// let node = RouteNode::new("projects", "Projects").with_child(overview);
///
/// assert!(node.path.is_none());
/// assert_eq!(node.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteNode {
    /// Stable kebab-case identifier, unique tree-wide
    pub id: String,

    /// Display name
    pub label: String,

    /// Absolute URL of a navigable node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Entitlement gate for a top-level section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_flag: Option<FeatureFlag>,

    /// Ordered sub-pages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Create a container node with no path, flag or children
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
            feature_flag: None,
            children: Vec::new(),
        }
    }

    /// With URL path
    #[inline]
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// With entitlement gate
    #[inline]
    #[must_use]
    pub fn with_flag(mut self, flag: FeatureFlag) -> Self {
        self.feature_flag = Some(flag);
        self
    }

    /// Append a child
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = RouteNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the node can be navigated to
    #[inline]
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.path.is_some()
    }

    /// Find a direct child by id
    #[must_use]
    pub fn child(&self, id: &str) -> Option<&RouteNode> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Ids of the direct children in authoring order
    #[must_use]
    pub fn child_ids(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Depth-first pre-order walk over a forest of nodes
///
/// Yields `(depth, node)` with top-level nodes at depth 0, visiting children
/// in authoring order.
pub fn walk(nodes: &[RouteNode]) -> Walk<'_> {
    Walk {
        stack: nodes.iter().rev().map(|n| (0, n)).collect(),
    }
}

/// Iterator returned by [`walk`]
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a RouteNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a RouteNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
