//! Error types for catalog loading
//!
//! Loading can fail on:
//! - unreadable files
//! - malformed YAML
//! - structural violations (duplicate ids/paths, bad ids, empty labels)

use std::path::PathBuf;

/// Errors while loading or validating a route catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// YAML did not match the route schema
    #[error("catalog syntax error: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog has no modules
    #[error("catalog is empty")]
    Empty,

    /// Same id used twice
    #[error("duplicate route id: '{id}'")]
    DuplicateId { id: String },

    /// Same path used by two nodes
    #[error("duplicate route path '{path}' on '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// Id is not kebab-case
    #[error("invalid route id: '{id}' (expected kebab-case)")]
    InvalidId { id: String },

    /// Path does not start with '/'
    #[error("route '{id}' has relative path '{path}'")]
    RelativePath { id: String, path: String },

    /// Label is blank
    #[error("route '{id}' has an empty label")]
    EmptyLabel { id: String },
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
