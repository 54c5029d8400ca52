//! Error types for policy loading

use nav_model::Role;
use std::path::PathBuf;

/// Errors while loading or checking a role matrix
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// YAML did not match the matrix schema
    #[error("policy syntax error: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `modules` was a string other than "*"
    #[error("invalid module scope '{0}': expected \"*\" or a list of module ids")]
    InvalidModuleScope(String),

    /// The matrix names an id the catalog does not have
    #[error("role '{role}' references unknown route id '{id}'")]
    UnknownReference { role: Role, id: String },

    /// Fallback role would grant more than a restricted role
    #[error("fallback role '{role}' is not a restricted role")]
    UnrestrictedFallback { role: Role },
}

impl PolicyError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Accept `role` as a fallback only when it is restricted
///
/// # Errors
/// [`PolicyError::UnrestrictedFallback`] for owner, admin and manager.
pub fn ensure_restricted_fallback(role: Role) -> PolicyResult<Role> {
    if role.is_restricted() {
        Ok(role)
    } else {
        Err(PolicyError::UnrestrictedFallback { role })
    }
}

/// Result type alias for policy operations
pub type PolicyResult<T> = Result<T, PolicyError>;
