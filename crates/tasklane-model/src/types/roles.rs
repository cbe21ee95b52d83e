//! Organization roles and their hierarchy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a member within an organization.
///
/// Roles are ranked from `SuperAdmin` (6) down to `Viewer` (1). The rank is
/// only used for comparisons between roles; what a role may actually do is
/// decided by the role permission table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Member,
    SalesRep,
    Viewer,
}

/// Error type for parsing Role from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl std::fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            "sales_rep" => Ok(Role::SalesRep),
            "viewer" => Ok(Role::Viewer),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    /// Every role, highest rank first.
    pub const ALL: [Role; 6] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::Member,
        Role::SalesRep,
        Role::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Member => "member",
            Role::SalesRep => "sales_rep",
            Role::Viewer => "viewer",
        }
    }

    /// Human readable label for pickers and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Member => "Member",
            Role::SalesRep => "Sales Rep",
            Role::Viewer => "Viewer",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Role::SuperAdmin => 6,
            Role::Admin => 5,
            Role::Manager => 4,
            Role::Member => 3,
            Role::SalesRep => 2,
            Role::Viewer => 1,
        }
    }

    /// Strictly higher in the hierarchy than `other`.
    pub fn outranks(&self, other: &Role) -> bool {
        self.rank() > other.rank()
    }

    /// Check if this role sits at or above another role in the hierarchy
    pub fn includes(&self, other: &Role) -> bool {
        self.rank() >= other.rank()
    }
}
