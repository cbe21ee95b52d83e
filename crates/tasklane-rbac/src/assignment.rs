//! Task assignment and role delegation rules.

use tasklane_model::{Action, OrganizationMember, Override, Role, UserId};
use tracing::debug;

use crate::{can_perform, role_grants, AccessContext, Permission, ResourceType};

/// Roles that may not pick themselves as assignee.
pub const SELF_ASSIGN_DISALLOWED: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Manager];

/// Whether a role may assign tasks to itself.
pub fn can_assign_tasks_to_self(role: Role) -> bool {
    !SELF_ASSIGN_DISALLOWED.contains(&role)
}

/// Whether `subject` may assign a task to `assignee`.
///
/// `permission_override` is the owning project's `assignToUser` override,
/// if any.
pub fn can_assign_task(
    role: Role,
    subject: &UserId,
    assignee: &UserId,
    permission_override: Option<&Override>,
) -> bool {
    let ctx = AccessContext::new()
        .with_override(permission_override)
        .subject(subject);
    if !can_perform(role, Action::Assign, ResourceType::Task, ctx) {
        return false;
    }
    if subject == assignee && !can_assign_tasks_to_self(role) {
        debug!(role = %role, "self-assignment not allowed for role");
        return false;
    }
    true
}

/// Candidates the subject may pick in a task's assignee selector.
pub fn assignable_users<'a>(
    role: Role,
    subject: &UserId,
    candidates: &'a [OrganizationMember],
    permission_override: Option<&Override>,
) -> Vec<&'a OrganizationMember> {
    candidates
        .iter()
        .filter(|m| can_assign_task(role, subject, &m.user_id, permission_override))
        .collect()
}

/// Delegated authority: an actor can only hand out roles at or below its
/// own, and only while holding `manage_roles`.
pub fn can_grant_role(actor: Role, target: Role) -> bool {
    role_grants(actor, Permission::ManageRoles) && actor.includes(&target)
}
