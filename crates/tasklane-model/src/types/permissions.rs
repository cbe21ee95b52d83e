//! Per-resource permission overrides.
//!
//! A resource (today: a project) may carry an override per action. An
//! override replaces the role defaults for that action on that resource only.
//! Persisted records look like `{ "level": "specific", "specificUsers": [..] }`
//! and are keyed by action name.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Action a subject attempts on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "create")]
    Create,
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "assignToUser", alias = "assign")]
    Assign,
    #[serde(rename = "manageMembers", alias = "manage")]
    Manage,
}

/// Error type for parsing Action from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError(pub String);

impl std::fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid action: {}", self.0)
    }
}

impl std::error::Error for ParseActionError {}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "assign" | "assignToUser" => Ok(Action::Assign),
            "manage" | "manageMembers" => Ok(Action::Manage),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Assign,
        Action::Manage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Assign => "assign",
            Action::Manage => "manage",
        }
    }
}

/// Level stored on a persisted override record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideLevel {
    All,
    None,
    Specific,
}

impl OverrideLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideLevel::All => "all",
            OverrideLevel::None => "none",
            OverrideLevel::Specific => "specific",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOverrideLevelError(pub String);

impl std::fmt::Display for ParseOverrideLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid override level: {}", self.0)
    }
}

impl std::error::Error for ParseOverrideLevelError {}

impl FromStr for OverrideLevel {
    type Err = ParseOverrideLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(OverrideLevel::All),
            "none" => Ok(OverrideLevel::None),
            "specific" => Ok(OverrideLevel::Specific),
            _ => Err(ParseOverrideLevelError(s.to_string())),
        }
    }
}

/// Override for one action on one resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OverrideRecord", into = "OverrideRecord")]
pub enum Override {
    /// Everyone may perform the action.
    AllowAll,
    /// Nobody may perform the action.
    DenyAll,
    /// Only the listed users may perform the action.
    AllowSpecific(BTreeSet<UserId>),
}

impl Override {
    pub fn specific<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserId>,
    {
        Override::AllowSpecific(users.into_iter().collect())
    }

    pub fn level(&self) -> OverrideLevel {
        match self {
            Override::AllowAll => OverrideLevel::All,
            Override::DenyAll => OverrideLevel::None,
            Override::AllowSpecific(_) => OverrideLevel::Specific,
        }
    }

    /// Resolve the override for a subject. A specific list never matches an
    /// anonymous subject.
    pub fn allows(&self, subject: Option<&UserId>) -> bool {
        match self {
            Override::AllowAll => true,
            Override::DenyAll => false,
            Override::AllowSpecific(users) => subject.is_some_and(|id| users.contains(id)),
        }
    }

    pub fn specific_users(&self) -> Option<&BTreeSet<UserId>> {
        match self {
            Override::AllowSpecific(users) => Some(users),
            _ => None,
        }
    }
}

/// Wire shape of an override.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverrideRecord {
    level: OverrideLevel,
    #[serde(default)]
    specific_users: Vec<UserId>,
}

impl From<OverrideRecord> for Override {
    fn from(record: OverrideRecord) -> Self {
        match record.level {
            OverrideLevel::All => Override::AllowAll,
            OverrideLevel::None => Override::DenyAll,
            OverrideLevel::Specific => Override::specific(record.specific_users),
        }
    }
}

impl From<Override> for OverrideRecord {
    fn from(value: Override) -> Self {
        let level = value.level();
        let specific_users = match value {
            Override::AllowSpecific(users) => users.into_iter().collect(),
            _ => Vec::new(),
        };
        OverrideRecord {
            level,
            specific_users,
        }
    }
}

/// Overrides attached to a single project, keyed by action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectPermissions(BTreeMap<Action, Override>);

impl ProjectPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides applied when a project is created: anyone may create and
    /// read, only the creator may update, delete, assign or manage members.
    pub fn for_new_project(creator: &UserId) -> Self {
        let creator_only = || Override::specific([creator.clone()]);
        let mut permissions = Self::new();
        permissions.set(Action::Create, Override::AllowAll);
        permissions.set(Action::Read, Override::AllowAll);
        permissions.set(Action::Update, creator_only());
        permissions.set(Action::Delete, creator_only());
        permissions.set(Action::Assign, creator_only());
        permissions.set(Action::Manage, creator_only());
        permissions
    }

    pub fn get(&self, action: Action) -> Option<&Override> {
        self.0.get(&action)
    }

    pub fn level(&self, action: Action) -> Option<OverrideLevel> {
        self.get(action).map(Override::level)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, &Override)> {
        self.0.iter().map(|(action, o)| (*action, o))
    }

    /// Replace the override for an action. Returns whether it changed.
    pub fn set(&mut self, action: Action, value: Override) -> bool {
        match self.0.insert(action, value.clone()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    /// Drop the override so the action falls back to role defaults.
    pub fn clear(&mut self, action: Action) -> bool {
        self.0.remove(&action).is_some()
    }

    /// Allow a user for an action.
    ///
    /// A specific list gains the user, a deny-all (or missing) override
    /// becomes a one-user list, and allow-all is left alone.
    pub fn grant_user(&mut self, action: Action, user: &UserId) -> bool {
        match self.0.get_mut(&action) {
            Some(Override::AllowAll) => false,
            Some(Override::AllowSpecific(users)) => users.insert(user.clone()),
            Some(Override::DenyAll) | None => {
                self.0.insert(action, Override::specific([user.clone()]));
                true
            }
        }
    }

    /// Remove a user from a specific list. Other levels have no list and
    /// are left unchanged.
    pub fn revoke_user(&mut self, action: Action, user: &UserId) -> bool {
        match self.0.get_mut(&action) {
            Some(Override::AllowSpecific(users)) => users.remove(user),
            _ => false,
        }
    }
}
