//! `(action, resource)` to permission lookup.

use std::str::FromStr;

use tasklane_model::Action;

use crate::{Permission, RbacError};

/// Kind of resource an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Project,
    Task,
    Channel,
    User,
    Role,
    Setting,
    Integration,
    Report,
}

impl ResourceType {
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Project,
        ResourceType::Task,
        ResourceType::Channel,
        ResourceType::User,
        ResourceType::Role,
        ResourceType::Setting,
        ResourceType::Integration,
        ResourceType::Report,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Project => "project",
            ResourceType::Task => "task",
            ResourceType::Channel => "channel",
            ResourceType::User => "user",
            ResourceType::Role => "role",
            ResourceType::Setting => "setting",
            ResourceType::Integration => "integration",
            ResourceType::Report => "report",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RbacError::UnknownResource(s.to_string()))
    }
}

/// Permission required for an action on a resource type, or `None` when the
/// combination is not supported at all.
pub fn required_permission(action: Action, resource: ResourceType) -> Option<Permission> {
    use Action::*;
    use ResourceType as R;

    let permission = match (resource, action) {
        (R::Project, Create) => Permission::CreateProjects,
        (R::Project, Read) => Permission::ViewProjects,
        (R::Project, Update) => Permission::EditProjects,
        (R::Project, Delete) => Permission::DeleteProjects,
        (R::Project, Manage) => Permission::ManageProjectMembers,

        (R::Task, Create) => Permission::CreateTasks,
        (R::Task, Read) => Permission::ViewTasks,
        (R::Task, Update) => Permission::EditTasks,
        (R::Task, Delete) => Permission::DeleteTasks,
        (R::Task, Assign) => Permission::AssignTasks,

        (R::Channel, Create) => Permission::CreateChannels,
        (R::Channel, Read) => Permission::ViewChannels,
        (R::Channel, Update | Manage) => Permission::ManageChannels,
        (R::Channel, Delete) => Permission::DeleteChannels,

        (R::User, Create) => Permission::InviteUsers,
        (R::User, Read) => Permission::ViewUsers,
        (R::User, Update) => Permission::EditUsers,
        (R::User, Delete) => Permission::RemoveUsers,
        (R::User, Assign) => Permission::ManageRoles, // assigning a role to a user

        (R::Role, Read) => Permission::ViewRoles,
        (R::Role, Create | Update | Delete) => Permission::ManageRoles,

        (R::Setting, Read) => Permission::ViewSettings,
        (R::Setting, Update | Manage) => Permission::ManageSettings,

        (R::Integration, Read) => Permission::ViewIntegrations,
        (R::Integration, Create | Update | Delete | Manage) => Permission::ManageIntegrations,

        (R::Report, Create | Update) => Permission::CreateReports,
        (R::Report, Read) => Permission::ViewReports,
        (R::Report, Delete) => Permission::DeleteReports,

        _ => return None,
    };
    Some(permission)
}
