//! Per-request navigation context
//!
//! The session layer resolves role, entitlements and assignment count once
//! per request and hands them over as a [`NavContext`]. Every filter stage
//! takes it as an argument.

use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// License entitlements of the current organization/user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlements {
    /// ATLVS core suite (enabled unless the session says otherwise)
    #[serde(rename = "feature_atlvs", default = "enabled")]
    pub atlvs: bool,

    /// OPENDECK marketplace
    #[serde(rename = "feature_opendeck", default)]
    pub opendeck: bool,

    /// GHXSTSHIP experiences
    #[serde(rename = "feature_ghxstship", default)]
    pub ghxstship: bool,
}

impl Entitlements {
    /// Explicit entitlement set
    #[inline]
    #[must_use]
    pub const fn new(atlvs: bool, opendeck: bool, ghxstship: bool) -> Self {
        Self {
            atlvs,
            opendeck,
            ghxstship,
        }
    }

    /// Nothing licensed
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    /// Everything licensed
    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        Self::new(true, true, true)
    }
}

impl Default for Entitlements {
    fn default() -> Self {
        Self::new(true, false, false)
    }
}

/// Session-derived input to every filter stage
///
/// # Example
/// ```
/// use nav_model::{Entitlements, NavContext};
///
/// let ctx = NavContext::new(Some("viewer"))
///     .with_entitlements(Entitlements::all())
///     .with_projects_assigned(0);
///
/// assert_eq!(ctx.role.as_deref(), Some("viewer"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavContext {
    /// Raw role string as stored for the membership
    #[serde(default)]
    pub role: Option<String>,

    /// License entitlements
    #[serde(default)]
    pub entitlements: Entitlements,

    /// Number of projects the user is assigned to
    #[serde(default)]
    pub projects_assigned_count: u32,
}

impl NavContext {
    /// Context with default entitlements and no assignments
    #[must_use]
    pub fn new(role: Option<&str>) -> Self {
        Self {
            role: role.map(str::to_string),
            ..Self::default()
        }
    }

    /// With entitlements
    #[inline]
    #[must_use]
    pub fn with_entitlements(mut self, entitlements: Entitlements) -> Self {
        self.entitlements = entitlements;
        self
    }

    /// With assignment count
    #[inline]
    #[must_use]
    pub fn with_projects_assigned(mut self, count: u32) -> Self {
        self.projects_assigned_count = count;
        self
    }
}
