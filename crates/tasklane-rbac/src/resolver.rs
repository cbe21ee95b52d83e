//! Effective permission resolution.

use tasklane_model::{Action, Override, Project, Role, Task, UserId};
use tracing::{debug, warn};

use crate::{required_permission, role_grants, Permission, ResourceType};

/// Per-call inputs besides role, action and resource type.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessContext<'a> {
    /// Override attached to the specific resource instance for this action.
    pub permission_override: Option<&'a Override>,
    /// The user attempting the action.
    pub subject_id: Option<&'a UserId>,
    /// Owner of the target resource.
    pub owner_id: Option<&'a UserId>,
}

impl<'a> AccessContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, permission_override: Option<&'a Override>) -> Self {
        self.permission_override = permission_override;
        self
    }

    pub fn subject(mut self, subject_id: &'a UserId) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    pub fn owner(mut self, owner_id: &'a UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }
}

/// Outcome of a permission check together with the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Owner editing their own task with `edit_own_tasks`.
    OwnerEdit,
    /// No permission exists for this action on this resource type.
    Unmapped,
    /// Resource override with level `all`.
    OverrideAll,
    /// Resource override with level `none`.
    OverrideNone,
    /// Resource override with level `specific`.
    OverrideSpecific { listed: bool },
    /// Role defaults grant the permission.
    RoleGrant(Permission),
    /// Role defaults lack the permission.
    RoleMissing(Permission),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        match self {
            Decision::OwnerEdit | Decision::OverrideAll | Decision::RoleGrant(_) => true,
            Decision::OverrideSpecific { listed } => *listed,
            Decision::Unmapped | Decision::OverrideNone | Decision::RoleMissing(_) => false,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::OwnerEdit => write!(f, "owner may edit own task"),
            Decision::Unmapped => write!(f, "action not supported on this resource"),
            Decision::OverrideAll => write!(f, "resource override allows everyone"),
            Decision::OverrideNone => write!(f, "resource override allows nobody"),
            Decision::OverrideSpecific { listed: true } => {
                write!(f, "subject listed in resource override")
            }
            Decision::OverrideSpecific { listed: false } => {
                write!(f, "subject not listed in resource override")
            }
            Decision::RoleGrant(p) => write!(f, "role grants {}", p),
            Decision::RoleMissing(p) => write!(f, "role lacks {}", p),
        }
    }
}

fn resolve(role: Role, action: Action, resource: ResourceType, ctx: AccessContext<'_>) -> Decision {
    // Owner edit wins over everything else. Only tasks have this bypass.
    if action == Action::Update
        && resource == ResourceType::Task
        && role_grants(role, Permission::EditOwnTasks)
    {
        if let (Some(subject), Some(owner)) = (ctx.subject_id, ctx.owner_id) {
            if subject == owner {
                return Decision::OwnerEdit;
            }
        }
    }

    let Some(permission) = required_permission(action, resource) else {
        return Decision::Unmapped;
    };

    if let Some(o) = ctx.permission_override {
        return match o {
            Override::AllowAll => Decision::OverrideAll,
            Override::DenyAll => Decision::OverrideNone,
            Override::AllowSpecific(_) => Decision::OverrideSpecific {
                listed: o.allows(ctx.subject_id),
            },
        };
    }

    if role_grants(role, permission) {
        Decision::RoleGrant(permission)
    } else {
        Decision::RoleMissing(permission)
    }
}

/// Decide an action and report which rule decided it.
pub fn evaluate(
    role: Role,
    action: Action,
    resource: ResourceType,
    ctx: AccessContext<'_>,
) -> Decision {
    let decision = resolve(role, action, resource, ctx);
    debug!(
        role = %role,
        action = %action,
        resource = %resource,
        allowed = decision.is_allowed(),
        reason = %decision,
        "permission decision"
    );
    decision
}

pub fn can_perform(
    role: Role,
    action: Action,
    resource: ResourceType,
    ctx: AccessContext<'_>,
) -> bool {
    evaluate(role, action, resource, ctx).is_allowed()
}

/// Same as [`can_perform`] for a role given as a string. Unknown roles hold
/// no permissions.
pub fn can_perform_str(
    role: &str,
    action: Action,
    resource: ResourceType,
    ctx: AccessContext<'_>,
) -> bool {
    match role.parse::<Role>() {
        Ok(role) => can_perform(role, action, resource, ctx),
        Err(e) => {
            warn!(error = %e, "denying request from unknown role");
            false
        }
    }
}

/// Check an action on a project, honouring the project's own override for
/// that action. Projects have no owner bypass.
pub fn can_perform_on_project(
    role: Role,
    subject: Option<&UserId>,
    action: Action,
    project: &Project,
) -> bool {
    let ctx = AccessContext {
        permission_override: project.permissions.get(action),
        subject_id: subject,
        owner_id: None,
    };
    can_perform(role, action, ResourceType::Project, ctx)
}

/// Check an action on a task. The task creator counts as owner. When the
/// owning project is known, its override for the action applies to the task.
pub fn can_perform_on_task(
    role: Role,
    subject: Option<&UserId>,
    action: Action,
    task: &Task,
    project: Option<&Project>,
) -> bool {
    let ctx = AccessContext {
        permission_override: project.and_then(|p| p.permissions.get(action)),
        subject_id: subject,
        owner_id: Some(task.owner_id()),
    };
    can_perform(role, action, ResourceType::Task, ctx)
}

/// Whether the subject may add a task to a project.
pub fn can_create_task_in(role: Role, subject: Option<&UserId>, project: &Project) -> bool {
    let ctx = AccessContext {
        permission_override: project.permissions.get(Action::Create),
        subject_id: subject,
        owner_id: None,
    };
    can_perform(role, Action::Create, ResourceType::Task, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tasklane_model::{
        CreateProjectParams, CreateTaskParams, OrganizationId, Priority, ProjectPermissions,
    };
    use uuid::Uuid;

    fn user(n: u128) -> UserId {
        UserId(Uuid::from_u128(n))
    }

    fn project_owned_by(owner: &UserId) -> Project {
        Project::create(
            CreateProjectParams {
                organization_id: OrganizationId::new(),
                name: "Launch".to_string(),
                description: None,
                start_date: None,
                due_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                owner_id: owner.clone(),
            },
            Utc::now(),
        )
    }

    fn task_created_by(creator: &UserId, project: &Project) -> Task {
        Task::create(
            CreateTaskParams {
                project_id: project.id.clone(),
                milestone_id: None,
                title: "Prepare slides".to_string(),
                status: "todo".to_string(),
                priority: Priority::Medium,
                start_date: None,
                due_date: None,
                assigned_to: None,
                created_by: creator.clone(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_unmapped_pairs_deny_for_every_role() {
        let everyone = Override::AllowAll;
        for role in Role::ALL {
            for resource in ResourceType::ALL {
                for action in Action::ALL {
                    if required_permission(action, resource).is_some() {
                        continue;
                    }
                    let ctx = AccessContext::new().with_override(Some(&everyone));
                    assert!(
                        !can_perform(role, action, resource, ctx),
                        "{} {} {}",
                        role,
                        action,
                        resource
                    );
                }
            }
        }
    }

    #[test]
    fn test_role_fallback() {
        let ctx = AccessContext::new();
        assert!(can_perform(Role::Manager, Action::Update, ResourceType::Project, ctx));
        assert!(!can_perform(Role::Manager, Action::Delete, ResourceType::Project, ctx));
        assert!(can_perform(Role::Viewer, Action::Read, ResourceType::Report, ctx));
        assert!(!can_perform(Role::Viewer, Action::Create, ResourceType::Task, ctx));
        assert_eq!(
            evaluate(Role::Member, Action::Delete, ResourceType::Task, ctx),
            Decision::RoleMissing(Permission::DeleteTasks)
        );
    }

    #[test]
    fn test_override_all_and_none_beat_role() {
        let all = Override::AllowAll;
        let none = Override::DenyAll;
        for role in Role::ALL {
            let allow_ctx = AccessContext::new().with_override(Some(&all));
            let deny_ctx = AccessContext::new().with_override(Some(&none));
            assert!(can_perform(role, Action::Delete, ResourceType::Project, allow_ctx));
            assert!(!can_perform(role, Action::Read, ResourceType::Project, deny_ctx));
        }
    }

    #[test]
    fn test_override_specific_follows_membership() {
        let alice = user(1);
        let bob = user(2);
        let mut permissions = ProjectPermissions::new();
        permissions.set(Action::Update, Override::specific([alice.clone()]));

        let check = |permissions: &ProjectPermissions, who: &UserId| {
            let ctx = AccessContext::new()
                .with_override(permissions.get(Action::Update))
                .subject(who);
            can_perform(Role::Viewer, Action::Update, ResourceType::Project, ctx)
        };

        assert!(check(&permissions, &alice));
        assert!(!check(&permissions, &bob));

        permissions.grant_user(Action::Update, &bob);
        assert!(check(&permissions, &bob));

        permissions.revoke_user(Action::Update, &alice);
        assert!(!check(&permissions, &alice));
    }

    #[test]
    fn test_specific_override_denies_anonymous_subject() {
        let listed = Override::specific([user(1)]);
        let ctx = AccessContext::new().with_override(Some(&listed));
        assert_eq!(
            evaluate(Role::SuperAdmin, Action::Read, ResourceType::Project, ctx),
            Decision::OverrideSpecific { listed: false }
        );
    }

    #[test]
    fn test_member_edits_only_own_task() {
        let alice = user(1);
        let bob = user(2);

        let own = AccessContext::new().subject(&alice).owner(&alice);
        let other = AccessContext::new().subject(&alice).owner(&bob);

        assert_eq!(
            evaluate(Role::Member, Action::Update, ResourceType::Task, own),
            Decision::OwnerEdit
        );
        assert!(!can_perform(Role::Member, Action::Update, ResourceType::Task, other));
    }

    #[test]
    fn test_owner_edit_ignores_override() {
        let alice = user(1);
        let none = Override::DenyAll;
        let ctx = AccessContext::new()
            .with_override(Some(&none))
            .subject(&alice)
            .owner(&alice);
        assert!(can_perform(Role::SalesRep, Action::Update, ResourceType::Task, ctx));
    }

    #[test]
    fn test_owner_edit_needs_role_grant() {
        let alice = user(1);
        let ctx = AccessContext::new().subject(&alice).owner(&alice);
        assert!(!can_perform(Role::Viewer, Action::Update, ResourceType::Task, ctx));
    }

    #[test]
    fn test_no_owner_bypass_for_projects() {
        let alice = user(1);
        let ctx = AccessContext::new().subject(&alice).owner(&alice);
        assert!(!can_perform(Role::Member, Action::Update, ResourceType::Project, ctx));
    }

    #[test]
    fn test_unknown_role_string_denies() {
        let all = Override::AllowAll;
        let ctx = AccessContext::new().with_override(Some(&all));
        assert!(!can_perform_str("owner", Action::Read, ResourceType::Project, ctx));
        assert!(can_perform_str("viewer", Action::Read, ResourceType::Project, ctx));
    }

    #[test]
    fn test_project_defaults_restrict_writes_to_creator() {
        let creator = user(1);
        let colleague = user(2);
        let project = project_owned_by(&creator);

        assert!(can_perform_on_project(Role::Viewer, Some(&colleague), Action::Read, &project));
        assert!(can_perform_on_project(Role::Member, Some(&creator), Action::Delete, &project));
        assert!(!can_perform_on_project(Role::Admin, Some(&colleague), Action::Update, &project));
        // Assign has no project-level permission
        assert!(!can_perform_on_project(
            Role::SuperAdmin,
            Some(&creator),
            Action::Assign,
            &project
        ));
    }

    #[test]
    fn test_task_checks_use_project_override() {
        let creator = user(1);
        let colleague = user(2);
        let project = project_owned_by(&creator);
        let task = task_created_by(&colleague, &project);

        // Colleague owns the task, so the owner rule lets them edit it.
        assert!(can_perform_on_task(
            Role::Member,
            Some(&colleague),
            Action::Update,
            &task,
            Some(&project)
        ));
        // The project only lets its creator delete.
        assert!(!can_perform_on_task(
            Role::Manager,
            Some(&colleague),
            Action::Delete,
            &task,
            Some(&project)
        ));
        // Without the project, role defaults apply.
        assert!(can_perform_on_task(
            Role::Manager,
            Some(&colleague),
            Action::Delete,
            &task,
            None
        ));
        assert!(can_create_task_in(Role::Viewer, Some(&colleague), &project));
    }
}
