//! Organizational roles
//!
//! Raw role strings come from the session layer in whatever spelling the
//! database or identity provider used. [`Role::parse`] maps them onto the
//! canonical set; unrecognized input is left to the caller's fallback.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Canonical role within an organization
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Organization owner
    Owner,
    /// Organization administrator
    Admin,
    /// Producer / project manager
    Manager,
    /// Crew or staff member
    TeamMember,
    /// Read-only member
    #[default]
    Viewer,
    /// External client
    Client,
    /// External vendor
    Vendor,
    /// External partner
    Partner,
}

/// Roles that lose project sub-pages while they hold no project assignment
pub const RESTRICTED_ROLES: [Role; 5] = [
    Role::TeamMember,
    Role::Viewer,
    Role::Client,
    Role::Vendor,
    Role::Partner,
];

impl Role {
    /// Every canonical role, most privileged first
    pub const ALL: [Role; 8] = [
        Role::Owner,
        Role::Admin,
        Role::Manager,
        Role::TeamMember,
        Role::Viewer,
        Role::Client,
        Role::Vendor,
        Role::Partner,
    ];

    /// Canonical snake_case identifier
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::TeamMember => "team_member",
            Self::Viewer => "viewer",
            Self::Client => "client",
            Self::Vendor => "vendor",
            Self::Partner => "partner",
        }
    }

    /// Map a raw role string onto a canonical role
    ///
    /// Case, surrounding whitespace and `-`/space separators are ignored.
    /// Returns `None` for anything not in the alias table.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        let role = match key.as_str() {
            "owner" | "org_owner" => Self::Owner,
            "admin" | "administrator" => Self::Admin,
            "manager" | "producer" | "project_manager" => Self::Manager,
            "team_member" | "member" | "crew" | "staff" => Self::TeamMember,
            "viewer" | "guest" | "read_only" => Self::Viewer,
            "client" => Self::Client,
            "vendor" | "supplier" => Self::Vendor,
            "partner" | "collaborator" => Self::Partner,
            _ => return None,
        };
        Some(role)
    }

    /// Parse, substituting `fallback` for unknown or missing input
    #[inline]
    #[must_use]
    pub fn normalize(raw: Option<&str>, fallback: Role) -> Self {
        raw.and_then(Self::parse).unwrap_or(fallback)
    }

    /// Whether the project-assignment narrowing rule applies to this role
    #[inline]
    #[must_use]
    pub fn is_restricted(self) -> bool {
        RESTRICTED_ROLES.contains(&self)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_canonical() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn parse_aliases_and_spelling() {
        assert_eq!(Role::parse("Team-Member"), Some(Role::TeamMember));
        assert_eq!(Role::parse("  ADMINISTRATOR "), Some(Role::Admin));
        assert_eq!(Role::parse("project manager"), Some(Role::Manager));
        assert_eq!(Role::parse("read-only"), Some(Role::Viewer));
        assert_eq!(Role::parse("supplier"), Some(Role::Vendor));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Role::parse("totally-bogus-role"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn normalize_falls_back() {
        assert_eq!(Role::normalize(None, Role::Viewer), Role::Viewer);
        assert_eq!(Role::normalize(Some("nope"), Role::Client), Role::Client);
        assert_eq!(Role::normalize(Some("owner"), Role::Client), Role::Owner);
    }

    #[test]
    fn restricted_set() {
        assert!(Role::Viewer.is_restricted());
        assert!(Role::Partner.is_restricted());
        assert!(!Role::Owner.is_restricted());
        assert!(!Role::Admin.is_restricted());
        assert!(!Role::Manager.is_restricted());
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&Role::TeamMember).unwrap();
        assert_eq!(json, "\"team_member\"");
    }

    proptest! {
        #[test]
        fn normalize_never_panics(raw in ".*") {
            let role = Role::normalize(Some(&raw), Role::Viewer);
            prop_assert!(Role::ALL.contains(&role));
        }
    }
}
