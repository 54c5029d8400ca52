//! Resolver configuration
//!
//! ```toml
//! catalog_path = "/etc/nav/routes.yaml"
//! policy_path = "/etc/nav/roles.yaml"
//! fallback_role = "client"
//! log_filter = "nav_core=debug"
//! ```
//!
//! Every key is optional. Missing paths select the embedded catalog and role
//! matrix.

use crate::error::{NavError, NavResult};
use nav_access::ensure_restricted_fallback;
use nav_model::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where to load the catalog and policy from, plus logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Replacement route catalog (YAML)
    pub catalog_path: Option<PathBuf>,
    /// Replacement role matrix (YAML)
    pub policy_path: Option<PathBuf>,
    /// Overrides the role matrix's fallback role; must be a restricted role
    pub fallback_role: Option<Role>,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            policy_path: None,
            fallback_role: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl NavConfig {
    /// Parse TOML
    ///
    /// # Errors
    /// [`NavError::Config`] for malformed TOML or unknown keys,
    /// [`NavError::Policy`] for a fallback role that is not restricted.
    pub fn from_toml_str(source: &str) -> NavResult<Self> {
        let config: Self = toml::from_str(source)?;
        if let Some(role) = config.fallback_role {
            ensure_restricted_fallback(role)?;
        }
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// [`NavError::Io`] when the file cannot be read, otherwise see
    /// [`NavConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> NavResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| NavError::io_error(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded navigation config from {}", path.display());
        Ok(config)
    }

    /// With catalog path
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// With policy path
    #[must_use]
    pub fn with_policy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.policy_path = Some(path.into());
        self
    }

    /// With fallback role
    #[must_use]
    pub fn with_fallback_role(mut self, role: Role) -> Self {
        self.fallback_role = Some(role);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_access::PolicyError;

    #[test]
    fn empty_config_uses_defaults() {
        let config = NavConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavConfig::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn parses_all_keys() {
        let config = NavConfig::from_toml_str(
            r#"
            catalog_path = "routes.yaml"
            policy_path = "roles.yaml"
            fallback_role = "client"
            log_filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog_path.as_deref(), Some(Path::new("routes.yaml")));
        assert_eq!(config.policy_path.as_deref(), Some(Path::new("roles.yaml")));
        assert_eq!(config.fallback_role, Some(Role::Client));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = NavConfig::from_toml_str("catalog = \"x\"").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(NavConfig::from_toml_str("fallback_role = \"intern\"").is_err());
    }

    #[test]
    fn rejects_unrestricted_fallback() {
        let err = NavConfig::from_toml_str("fallback_role = \"owner\"").unwrap_err();
        assert!(matches!(
            err,
            NavError::Policy(PolicyError::UnrestrictedFallback { role: Role::Owner })
        ));
    }

    #[test]
    fn missing_file() {
        let err = NavConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, NavError::Io { .. }));
    }
}
