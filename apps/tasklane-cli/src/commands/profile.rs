use std::path::Path;

use tasklane_config::{CliConfig, ProfileConfig};
use tasklane_model::{OrganizationId, Role, UserId};

pub fn cmd_profile_add(
    config_path: &Path,
    name: &str,
    role: &str,
    user: Option<&str>,
    organization: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = role.parse::<Role>()?;
    let user_id = match user {
        Some(u) => u.parse::<UserId>()?,
        None => UserId::new(),
    };
    let organization_id = organization.map(str::parse::<OrganizationId>).transpose()?;

    let mut config = CliConfig::load_or_default(config_path)?;
    let replaced = config.upsert_profile(ProfileConfig {
        name: name.to_string(),
        user_id: user_id.clone(),
        role,
        organization_id,
    });
    if config.current_profile.is_none() {
        config.current_profile = Some(name.to_string());
    }
    config.save_to(config_path)?;

    let verb = if replaced { "Updated" } else { "Added" };
    println!("{} profile '{}' ({}, user {})", verb, name, role, user_id);
    Ok(())
}

pub fn cmd_profile_use(config_path: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::load_from(config_path)?;
    config.set_current_profile(name)?;
    config.save_to(config_path)?;
    println!("Switched to profile: {}", name);
    Ok(())
}

pub fn cmd_profile_list(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load_or_default(config_path)?;
    if config.profiles.is_empty() {
        println!("No profiles found.");
        return Ok(());
    }

    let current = config.get_current_profile().ok().map(|p| p.name.clone());
    for profile in &config.profiles {
        let marker = if current.as_deref() == Some(profile.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{} {} ({})", marker, profile.name, profile.role);
    }
    Ok(())
}

pub fn cmd_profile_current(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load_from(config_path)?;
    let profile = config.get_current_profile()?;
    println!("{}", profile.name);
    println!("  role: {}", profile.role);
    println!("  user: {}", profile.user_id);
    if let Some(org) = &profile.organization_id {
        println!("  organization: {}", org);
    }
    Ok(())
}
