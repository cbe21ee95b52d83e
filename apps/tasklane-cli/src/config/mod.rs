pub mod workspace;

use std::path::{Path, PathBuf};

use tasklane_config::{CliConfig, ConfigError, ProfileConfig};
use tasklane_model::UserId;

pub use workspace::{find_workspace_config, WorkspaceConfig};

pub fn config_path(arg: Option<&Path>) -> PathBuf {
    arg.map(Path::to_path_buf)
        .unwrap_or_else(CliConfig::default_path)
}

/// Current profile, or `None` when no config file or profile exists yet.
pub fn current_profile(path: &Path) -> Result<Option<ProfileConfig>, ConfigError> {
    let config = CliConfig::load_or_default(path)?;
    match config.get_current_profile() {
        Ok(profile) => Ok(Some(profile.clone())),
        Err(ConfigError::NoProfiles) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Role to evaluate as: flag or env var, then profile, then tasklane.toml.
/// Kept as a string so unknown roles reach the resolver and are denied
/// there.
pub fn resolve_role(
    role_arg: Option<&str>,
    profile: Option<&ProfileConfig>,
    workspace: Option<&WorkspaceConfig>,
) -> Result<String, Box<dyn std::error::Error>> {
    role_arg
        .map(str::to_string)
        .or_else(|| profile.map(|p| p.role.to_string()))
        .or_else(|| workspace.and_then(|w| w.defaults.role.clone()))
        .ok_or_else(|| {
            "role not specified (use --role, add a profile, or set defaults.role in tasklane.toml)"
                .into()
        })
}

/// Acting user: flag or env var, then profile. May be absent.
pub fn resolve_subject(
    subject_arg: Option<&str>,
    profile: Option<&ProfileConfig>,
) -> Result<Option<UserId>, Box<dyn std::error::Error>> {
    match subject_arg {
        Some(s) => {
            let user_id = s
                .parse::<UserId>()
                .map_err(|e| format!("invalid user ID '{}': {}", s, e))?;
            Ok(Some(user_id))
        }
        None => Ok(profile.map(|p| p.user_id.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklane_model::Role;
    use workspace::WorkspaceDefaults;

    fn profile() -> ProfileConfig {
        ProfileConfig {
            name: "work".to_string(),
            user_id: UserId::new(),
            role: Role::SalesRep,
            organization_id: None,
        }
    }

    #[test]
    fn test_resolve_role_precedence() {
        let p = profile();
        let ws = WorkspaceConfig {
            defaults: WorkspaceDefaults {
                role: Some("viewer".to_string()),
                ..WorkspaceDefaults::default()
            },
        };

        assert_eq!(resolve_role(Some("admin"), Some(&p), Some(&ws)).unwrap(), "admin");
        assert_eq!(resolve_role(None, Some(&p), Some(&ws)).unwrap(), "sales_rep");
        assert_eq!(resolve_role(None, None, Some(&ws)).unwrap(), "viewer");
        assert!(resolve_role(None, None, None).is_err());
    }

    #[test]
    fn test_resolve_subject() {
        let p = profile();
        assert_eq!(resolve_subject(None, Some(&p)).unwrap(), Some(p.user_id.clone()));
        assert_eq!(resolve_subject(None, None).unwrap(), None);
        assert!(resolve_subject(Some("not-a-uuid"), Some(&p)).is_err());
    }

    #[test]
    fn test_current_profile_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(current_profile(&path).unwrap().is_none());
    }
}
