//! Default permissions per role.
//!
//! Read-only tables; there is no runtime mutation of role defaults.

use tasklane_model::Role;

use crate::Permission;
use crate::Permission::*;

const SUPER_ADMIN: &[Permission] = &Permission::ALL;

const ADMIN: &[Permission] = &[
    ViewOrganization,
    ManageOrganization,
    CreateProjects,
    ViewProjects,
    EditProjects,
    DeleteProjects,
    ManageProjectMembers,
    CreateTasks,
    ViewTasks,
    EditTasks,
    EditOwnTasks,
    DeleteTasks,
    AssignTasks,
    ViewUsers,
    InviteUsers,
    EditUsers,
    RemoveUsers,
    ViewRoles,
    ManageRoles,
    ViewSettings,
    ManageSettings,
    ViewIntegrations,
    ManageIntegrations,
    ViewReports,
    CreateReports,
    ExportReports,
    DeleteReports,
    ViewChannels,
    CreateChannels,
    ManageChannels,
    DeleteChannels,
];

const MANAGER: &[Permission] = &[
    ViewOrganization,
    CreateProjects,
    ViewProjects,
    EditProjects,
    ManageProjectMembers,
    CreateTasks,
    ViewTasks,
    EditTasks,
    EditOwnTasks,
    DeleteTasks,
    AssignTasks,
    ViewUsers,
    InviteUsers,
    ViewRoles,
    ViewSettings,
    ViewIntegrations,
    ViewReports,
    CreateReports,
    ExportReports,
    ViewChannels,
    CreateChannels,
    ManageChannels,
];

const MEMBER: &[Permission] = &[
    ViewOrganization,
    ViewProjects,
    CreateTasks,
    ViewTasks,
    EditOwnTasks,
    AssignTasks,
    ViewUsers,
    ViewReports,
    ViewChannels,
    CreateChannels,
];

const SALES_REP: &[Permission] = &[
    ViewOrganization,
    ViewProjects,
    CreateTasks,
    ViewTasks,
    EditOwnTasks,
    AssignTasks,
    ViewUsers,
    ViewReports,
    CreateReports,
    ViewChannels,
    CreateChannels,
];

const VIEWER: &[Permission] = &[
    ViewOrganization,
    ViewProjects,
    ViewTasks,
    ViewUsers,
    ViewReports,
    ViewChannels,
];

/// Default permission set of a role.
pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::Admin => ADMIN,
        Role::Manager => MANAGER,
        Role::Member => MEMBER,
        Role::SalesRep => SALES_REP,
        Role::Viewer => VIEWER,
    }
}

pub fn role_grants(role: Role, permission: Permission) -> bool {
    role_permissions(role).contains(&permission)
}
