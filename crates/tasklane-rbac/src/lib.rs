//! Permission resolution for tasklane.
//!
//! Decides whether a subject holding an organization role may perform an
//! action on a resource. Resolution order:
//!
//! 1. Task owners whose role grants `edit_own_tasks` may always update
//!    their own tasks.
//! 2. The `(action, resource)` pair is mapped to a catalog permission;
//!    unmapped pairs are denied.
//! 3. A per-resource override for the action, when present, decides alone.
//! 4. Otherwise the role's static permission set decides.
//!
//! Everything here is a pure function over in-memory values. Denials are
//! plain `false` (or a [`Decision`] explaining why), never errors.

use thiserror::Error;

mod assignment;
mod catalog;
mod lookup;
mod resolver;
mod role_table;

pub use assignment::{
    assignable_users, can_assign_task, can_assign_tasks_to_self, can_grant_role,
    SELF_ASSIGN_DISALLOWED,
};
pub use catalog::{Permission, PermissionCategory};
pub use lookup::{required_permission, ResourceType};
pub use resolver::{
    can_create_task_in, can_perform, can_perform_on_project, can_perform_on_task,
    can_perform_str, evaluate, AccessContext, Decision,
};
pub use role_table::{role_grants, role_permissions};

/// Errors raised while parsing RBAC vocabulary from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
    #[error("unknown resource type: {0}")]
    UnknownResource(String),
}
