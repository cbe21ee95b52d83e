use std::path::Path;

use tasklane_model::{Action, Override, OverrideLevel, ProjectPermissions, Role, UserId};
use tasklane_rbac::{
    can_assign_tasks_to_self, can_grant_role, can_perform_str, evaluate, role_grants,
    AccessContext, PermissionCategory, ResourceType,
};

use crate::config::{current_profile, find_workspace_config, resolve_role, resolve_subject};

fn parse_user(s: &str) -> Result<UserId, Box<dyn std::error::Error>> {
    s.parse::<UserId>()
        .map_err(|e| format!("invalid user ID '{}': {}", s, e).into())
}

fn parse_role(s: &str) -> Result<Role, Box<dyn std::error::Error>> {
    Ok(s.parse::<Role>()?)
}

fn role_for(config: &Path, role_arg: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    let profile = current_profile(config)?;
    let workspace = find_workspace_config();
    resolve_role(role_arg, profile.as_ref(), workspace.as_ref())
}

fn build_override(
    level: Option<&str>,
    allow_users: &[String],
) -> Result<Option<Override>, Box<dyn std::error::Error>> {
    let Some(level) = level else {
        if !allow_users.is_empty() {
            return Err("--allow-user requires --level specific".into());
        }
        return Ok(None);
    };
    let o = match level.parse::<OverrideLevel>()? {
        OverrideLevel::All => Override::AllowAll,
        OverrideLevel::None => Override::DenyAll,
        OverrideLevel::Specific => {
            let users = allow_users
                .iter()
                .map(|u| parse_user(u))
                .collect::<Result<Vec<_>, _>>()?;
            Override::specific(users)
        }
    };
    Ok(Some(o))
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_permission_check(
    config: &Path,
    action: &str,
    resource: &str,
    role: Option<&str>,
    subject: Option<&str>,
    owner: Option<&str>,
    level: Option<&str>,
    allow_users: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let action = action.parse::<Action>()?;
    let resource = resource.parse::<ResourceType>()?;
    let profile = current_profile(config)?;
    let workspace = find_workspace_config();
    let role = resolve_role(role, profile.as_ref(), workspace.as_ref())?;
    let subject = resolve_subject(subject, profile.as_ref())?;
    let owner = owner.map(parse_user).transpose()?;
    let permission_override = build_override(level, allow_users)?;

    let ctx = AccessContext {
        permission_override: permission_override.as_ref(),
        subject_id: subject.as_ref(),
        owner_id: owner.as_ref(),
    };

    match role.parse::<Role>() {
        Ok(parsed) => {
            let decision = evaluate(parsed, action, resource, ctx);
            let verdict = if decision.is_allowed() { "allow" } else { "deny" };
            println!("{}: {}", verdict, decision);
        }
        Err(_) => {
            let allowed = can_perform_str(&role, action, resource, ctx);
            let verdict = if allowed { "allow" } else { "deny" };
            println!("{}: unknown role '{}'", verdict, role);
        }
    }

    Ok(())
}

pub fn cmd_permission_matrix(
    config: &Path,
    role: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = parse_role(&role_for(config, role)?)?;

    println!("Permissions for {} ({}):", role.label(), role);
    for category in PermissionCategory::ALL {
        let granted: Vec<String> = category
            .permissions()
            .filter(|p| role_grants(role, *p))
            .map(|p| p.to_string())
            .collect();
        if granted.is_empty() {
            println!("  {}: -", category.as_str());
        } else {
            println!("  {}: {}", category.as_str(), granted.join(", "));
        }
    }

    Ok(())
}

pub fn cmd_permission_self_assign(
    config: &Path,
    role: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = parse_role(&role_for(config, role)?)?;
    if can_assign_tasks_to_self(role) {
        println!("{} can assign tasks to themselves", role);
    } else {
        println!("{} cannot assign tasks to themselves", role);
    }
    Ok(())
}

pub fn cmd_permission_defaults(creator: &str) -> Result<(), Box<dyn std::error::Error>> {
    let creator = parse_user(creator)?;
    let permissions = ProjectPermissions::for_new_project(&creator);
    println!("{}", serde_json::to_string_pretty(&permissions)?);
    Ok(())
}

pub fn cmd_permission_delegate(
    config: &Path,
    target: &str,
    role: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let actor = parse_role(&role_for(config, role)?)?;
    let target = parse_role(target)?;
    if can_grant_role(actor, target) {
        println!("allow: {} may grant {}", actor, target);
    } else {
        println!("deny: {} may not grant {}", actor, target);
    }
    Ok(())
}
