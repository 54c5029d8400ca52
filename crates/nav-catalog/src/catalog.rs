//! The route catalog
//!
//! [`RouteCatalog`] owns the authored tree. It is built once, validated, and
//! then only ever read; filters clone the parts they keep.

use crate::error::{CatalogError, CatalogResult};
use nav_model::{walk, RouteNode};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Catalog source compiled into the binary
pub const EMBEDDED_ROUTES: &str = include_str!("../catalog/routes.yaml");

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("id pattern is a valid regex"));

static EMBEDDED: Lazy<RouteCatalog> = Lazy::new(|| {
    RouteCatalog::from_yaml_str(EMBEDDED_ROUTES).expect("embedded route catalog is valid")
});

/// Validated, immutable navigation catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCatalog {
    nodes: Vec<RouteNode>,
}

impl RouteCatalog {
    /// Build from nodes, validating structure
    ///
    /// # Errors
    /// Returns the first structural violation found in pre-order.
    pub fn new(nodes: Vec<RouteNode>) -> CatalogResult<Self> {
        validate(&nodes)?;
        Ok(Self { nodes })
    }

    /// Parse and validate YAML
    ///
    /// # Errors
    /// [`CatalogError::Syntax`] for malformed YAML, otherwise see [`RouteCatalog::new`].
    pub fn from_yaml_str(source: &str) -> CatalogResult<Self> {
        let nodes: Vec<RouteNode> = serde_yaml::from_str(source)?;
        Self::new(nodes)
    }

    /// Load from a YAML file
    ///
    /// # Errors
    /// [`CatalogError::Io`] when the file cannot be read, otherwise see
    /// [`RouteCatalog::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
        let catalog = Self::from_yaml_str(&source)?;
        tracing::debug!(
            "Loaded route catalog from {}: {} modules",
            path.display(),
            catalog.nodes.len()
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    ///
    /// # Panics
    /// Never in practice: the embedded source is checked by this crate's tests.
    #[must_use]
    pub fn embedded() -> &'static RouteCatalog {
        &EMBEDDED
    }

    /// Top-level modules in authoring order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }

    /// Number of top-level modules
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no modules
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find any node by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RouteNode> {
        walk(&self.nodes).map(|(_, n)| n).find(|n| n.id == id)
    }

    /// Find a top-level module by id
    #[must_use]
    pub fn module(&self, id: &str) -> Option<&RouteNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Whether any node carries this id
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids of all top-level modules
    #[must_use]
    pub fn module_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Every node that has a path, in pre-order
    pub fn navigable(&self) -> impl Iterator<Item = &RouteNode> {
        walk(&self.nodes).map(|(_, n)| n).filter(|n| n.is_navigable())
    }

    /// Consume into the raw node list
    #[must_use]
    pub fn into_nodes(self) -> Vec<RouteNode> {
        self.nodes
    }
}

impl AsRef<[RouteNode]> for RouteCatalog {
    fn as_ref(&self) -> &[RouteNode] {
        &self.nodes
    }
}

/// Check structural invariants of a node forest
///
/// - at least one module
/// - ids kebab-case and unique tree-wide
/// - labels non-empty
/// - paths absolute and unique tree-wide
///
/// # Errors
/// The first violation found in pre-order.
pub fn validate(nodes: &[RouteNode]) -> CatalogResult<()> {
    if nodes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut ids: HashSet<&str> = HashSet::new();
    let mut paths: HashMap<&str, &str> = HashMap::new();

    for (_, node) in walk(nodes) {
        if !ID_PATTERN.is_match(&node.id) {
            return Err(CatalogError::InvalidId {
                id: node.id.clone(),
            });
        }
        if !ids.insert(&node.id) {
            return Err(CatalogError::DuplicateId {
                id: node.id.clone(),
            });
        }
        if node.label.trim().is_empty() {
            return Err(CatalogError::EmptyLabel {
                id: node.id.clone(),
            });
        }
        if let Some(path) = node.path.as_deref() {
            if !path.starts_with('/') {
                return Err(CatalogError::RelativePath {
                    id: node.id.clone(),
                    path: path.to_string(),
                });
            }
            if let Some(first) = paths.insert(path, &node.id) {
                return Err(CatalogError::DuplicatePath {
                    path: path.to_string(),
                    first: first.to_string(),
                    second: node.id.clone(),
                });
            }
        }
    }

    Ok(())
}
