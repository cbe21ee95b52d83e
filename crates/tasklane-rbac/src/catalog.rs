//! Static permission catalog.

use std::str::FromStr;

use crate::RbacError;

/// Grouping used by the permission management screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermissionCategory {
    Organization,
    Projects,
    Tasks,
    Users,
    Settings,
    Reports,
    Chat,
}

impl PermissionCategory {
    pub const ALL: [PermissionCategory; 7] = [
        PermissionCategory::Organization,
        PermissionCategory::Projects,
        PermissionCategory::Tasks,
        PermissionCategory::Users,
        PermissionCategory::Settings,
        PermissionCategory::Reports,
        PermissionCategory::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionCategory::Organization => "organization",
            PermissionCategory::Projects => "projects",
            PermissionCategory::Tasks => "tasks",
            PermissionCategory::Users => "users",
            PermissionCategory::Settings => "settings",
            PermissionCategory::Reports => "reports",
            PermissionCategory::Chat => "chat",
        }
    }

    /// Permissions belonging to this category, in catalog order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::ALL
            .into_iter()
            .filter(move |p| p.category() == self)
    }
}

/// A single named capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    // Organization
    ViewOrganization,
    ManageOrganization,
    ManageBilling,

    // Projects
    CreateProjects,
    ViewProjects,
    EditProjects,
    DeleteProjects,
    ManageProjectMembers,

    // Tasks
    CreateTasks,
    ViewTasks,
    EditTasks,
    EditOwnTasks,
    DeleteTasks,
    AssignTasks,

    // Users
    ViewUsers,
    InviteUsers,
    EditUsers,
    RemoveUsers,
    ViewRoles,
    ManageRoles,

    // Settings
    ViewSettings,
    ManageSettings,
    ViewIntegrations,
    ManageIntegrations,

    // Reports
    ViewReports,
    CreateReports,
    ExportReports,
    DeleteReports,

    // Chat
    ViewChannels,
    CreateChannels,
    ManageChannels,
    DeleteChannels,
}

impl Permission {
    pub const ALL: [Permission; 32] = [
        Permission::ViewOrganization,
        Permission::ManageOrganization,
        Permission::ManageBilling,
        Permission::CreateProjects,
        Permission::ViewProjects,
        Permission::EditProjects,
        Permission::DeleteProjects,
        Permission::ManageProjectMembers,
        Permission::CreateTasks,
        Permission::ViewTasks,
        Permission::EditTasks,
        Permission::EditOwnTasks,
        Permission::DeleteTasks,
        Permission::AssignTasks,
        Permission::ViewUsers,
        Permission::InviteUsers,
        Permission::EditUsers,
        Permission::RemoveUsers,
        Permission::ViewRoles,
        Permission::ManageRoles,
        Permission::ViewSettings,
        Permission::ManageSettings,
        Permission::ViewIntegrations,
        Permission::ManageIntegrations,
        Permission::ViewReports,
        Permission::CreateReports,
        Permission::ExportReports,
        Permission::DeleteReports,
        Permission::ViewChannels,
        Permission::CreateChannels,
        Permission::ManageChannels,
        Permission::DeleteChannels,
    ];

    /// Stable identifier used in persisted role data.
    pub fn id(&self) -> &'static str {
        match self {
            Permission::ViewOrganization => "view_organization",
            Permission::ManageOrganization => "manage_organization",
            Permission::ManageBilling => "manage_billing",
            Permission::CreateProjects => "create_projects",
            Permission::ViewProjects => "view_projects",
            Permission::EditProjects => "edit_projects",
            Permission::DeleteProjects => "delete_projects",
            Permission::ManageProjectMembers => "manage_project_members",
            Permission::CreateTasks => "create_tasks",
            Permission::ViewTasks => "view_tasks",
            Permission::EditTasks => "edit_tasks",
            Permission::EditOwnTasks => "edit_own_tasks",
            Permission::DeleteTasks => "delete_tasks",
            Permission::AssignTasks => "assign_tasks",
            Permission::ViewUsers => "view_users",
            Permission::InviteUsers => "invite_users",
            Permission::EditUsers => "edit_users",
            Permission::RemoveUsers => "remove_users",
            Permission::ViewRoles => "view_roles",
            Permission::ManageRoles => "manage_roles",
            Permission::ViewSettings => "view_settings",
            Permission::ManageSettings => "manage_settings",
            Permission::ViewIntegrations => "view_integrations",
            Permission::ManageIntegrations => "manage_integrations",
            Permission::ViewReports => "view_reports",
            Permission::CreateReports => "create_reports",
            Permission::ExportReports => "export_reports",
            Permission::DeleteReports => "delete_reports",
            Permission::ViewChannels => "view_channels",
            Permission::CreateChannels => "create_channels",
            Permission::ManageChannels => "manage_channels",
            Permission::DeleteChannels => "delete_channels",
        }
    }

    pub fn category(&self) -> PermissionCategory {
        use Permission::*;
        match self {
            ViewOrganization | ManageOrganization | ManageBilling => {
                PermissionCategory::Organization
            }
            CreateProjects | ViewProjects | EditProjects | DeleteProjects
            | ManageProjectMembers => PermissionCategory::Projects,
            CreateTasks | ViewTasks | EditTasks | EditOwnTasks | DeleteTasks | AssignTasks => {
                PermissionCategory::Tasks
            }
            ViewUsers | InviteUsers | EditUsers | RemoveUsers | ViewRoles | ManageRoles => {
                PermissionCategory::Users
            }
            ViewSettings | ManageSettings | ViewIntegrations | ManageIntegrations => {
                PermissionCategory::Settings
            }
            ViewReports | CreateReports | ExportReports | DeleteReports => {
                PermissionCategory::Reports
            }
            ViewChannels | CreateChannels | ManageChannels | DeleteChannels => {
                PermissionCategory::Chat
            }
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| RbacError::UnknownPermission(s.to_string()))
    }
}
