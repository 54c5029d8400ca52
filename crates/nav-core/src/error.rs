//! Error types for assembling a resolver
//!
//! Resolution itself is total; these only arise while loading the catalog,
//! the role matrix or the configuration file.

use nav_access::PolicyError;
use nav_catalog::CatalogError;
use std::path::PathBuf;

/// Errors while building a [`crate::NavigationResolver`]
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Catalog failed to load or validate
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Role matrix failed to load or references unknown ids
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Configuration file is not valid TOML for [`crate::NavConfig`]
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error during config read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NavError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for resolver setup
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_pass_through() {
        let err: NavError = CatalogError::Empty.into();
        assert_eq!(err.to_string(), "catalog is empty");
    }

    #[test]
    fn config_errors_are_prefixed() {
        let toml_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: NavError = toml_err.into();
        assert!(err.to_string().starts_with("config error:"));
    }
}
