//! UI-facing projections of the route tree
//!
//! These are what the sidebar, command palette and breadcrumb components
//! consume. They are derived per request and never cached.

use serde::{Deserialize, Serialize};

/// Fallback href for items without a path
pub const PLACEHOLDER_HREF: &str = "#";

/// Label that sorts to the front of every section
pub const OVERVIEW_LABEL: &str = "Overview";

/// A single sidebar link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display name
    pub label: String,
    /// Target URL, `#` when the page has no path
    pub href: String,
}

impl NavItem {
    /// Create item
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Whether this is the section's Overview entry
    #[inline]
    #[must_use]
    pub fn is_overview(&self) -> bool {
        self.label == OVERVIEW_LABEL
    }
}

/// A sidebar group built from one top-level section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Section display name
    pub label: String,
    /// Ordered links
    pub items: Vec<NavItem>,
}

impl NavSection {
    /// Labels of all items in order
    #[must_use]
    pub fn item_labels(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.label.as_str()).collect()
    }
}

/// Dropdown entry offered next to a breadcrumb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    /// Node id
    pub id: String,
    /// Display name
    pub label: String,
    /// Target URL
    pub href: String,
}

/// Searchable command palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCommand {
    /// `section:item`, lowercased and hyphenated
    pub id: String,
    /// Section label
    pub section: String,
    /// Item label
    pub label: String,
    /// Target URL
    pub href: String,
}
