use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tasklane_model::{OrganizationId, Role, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found. Run 'tasklane profile add' first.")]
    NotFound,
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No profiles configured")]
    NoProfiles,
    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),
}

/// Main user configuration stored in ~/.tasklane/config.json
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CliConfig {
    pub profiles: Vec<ProfileConfig>,
    #[serde(default)]
    pub current_profile: Option<String>, // Name of current profile
}

/// Identity the CLI evaluates rules as
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub name: String,
    pub user_id: UserId,
    pub role: Role,
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
}

impl CliConfig {
    /// Load config from default path (~/.tasklane/config.json)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path())
    }

    /// Load config from custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound
            } else {
                ConfigError::Read(e)
            }
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load config, treating a missing file as empty
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load_from(path) {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path())
    }

    /// Save config to custom path
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&self)?)?;
        Ok(())
    }

    /// Get default config path (~/.tasklane/config.json)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .expect("Failed to get home directory")
            .join(".tasklane")
            .join("config.json")
    }

    /// Get the current active profile
    pub fn get_current_profile(&self) -> Result<&ProfileConfig, ConfigError> {
        let profile_name = self
            .current_profile
            .as_ref()
            .or_else(|| self.profiles.first().map(|p| &p.name))
            .ok_or(ConfigError::NoProfiles)?;

        self.profiles
            .iter()
            .find(|p| &p.name == profile_name)
            .ok_or_else(|| ConfigError::ProfileNotFound(profile_name.clone()))
    }

    /// Get a profile by name
    pub fn get_profile(&self, name: &str) -> Result<&ProfileConfig, ConfigError> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))
    }

    /// Add a profile, replacing any existing profile with the same name.
    /// Returns true if a profile was replaced.
    pub fn upsert_profile(&mut self, profile: ProfileConfig) -> bool {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => {
                *existing = profile;
                true
            }
            None => {
                self.profiles.push(profile);
                false
            }
        }
    }

    /// Switch the current profile
    pub fn set_current_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        self.get_profile(name)?;
        self.current_profile = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use uuid::Uuid;

    fn profile(name: &str, role: Role) -> ProfileConfig {
        ProfileConfig {
            name: name.to_string(),
            user_id: UserId(Uuid::from_u128(name.len() as u128)),
            role,
            organization_id: None,
        }
    }

    #[test]
    fn test_cli_config_roundtrip() {
        let config = CliConfig {
            profiles: vec![ProfileConfig {
                organization_id: Some(OrganizationId(Uuid::from_u128(9))),
                ..profile("work", Role::Manager)
            }],
            current_profile: Some("work".to_string()),
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.profiles, config.profiles);
        assert_eq!(parsed.current_profile, config.current_profile);
        assert!(json.contains("\"role\": \"manager\""));
    }

    #[test]
    fn test_get_current_profile() {
        let config = CliConfig {
            profiles: vec![profile("work", Role::Admin), profile("review", Role::Viewer)],
            current_profile: Some("review".to_string()),
        };

        let current = config.get_current_profile().unwrap();
        assert_eq!(current.name, "review");
        assert_eq!(current.role, Role::Viewer);
    }

    #[test]
    fn test_get_current_profile_falls_back_to_first() {
        let config = CliConfig {
            profiles: vec![profile("work", Role::Admin), profile("review", Role::Viewer)],
            current_profile: None,
        };

        let current = config.get_current_profile().unwrap();
        assert_eq!(current.name, "work");
    }

    #[test]
    fn test_get_current_profile_no_profiles() {
        let config = CliConfig::default();
        let result = config.get_current_profile();
        assert!(matches!(result, Err(ConfigError::NoProfiles)));
    }

    #[test]
    fn test_get_current_profile_not_found() {
        let config = CliConfig {
            profiles: vec![profile("work", Role::Admin)],
            current_profile: Some("nonexistent".to_string()),
        };

        let result = config.get_current_profile();
        assert!(matches!(result, Err(ConfigError::ProfileNotFound(_))));
    }

    #[test]
    fn test_get_profile_not_found() {
        let config = CliConfig::default();
        let result = config.get_profile("nonexistent");
        assert!(matches!(result, Err(ConfigError::ProfileNotFound(name)) if name == "nonexistent"));
    }

    #[test]
    fn test_upsert_and_switch_profile() {
        let mut config = CliConfig::default();
        assert!(!config.upsert_profile(profile("work", Role::Member)));
        assert!(config.upsert_profile(profile("work", Role::Manager)));
        assert_eq!(config.profiles.len(), 1);
        assert_eq!(config.profiles[0].role, Role::Manager);

        assert!(config.set_current_profile("missing").is_err());
        assert!(config.current_profile.is_none());

        config.set_current_profile("work").unwrap();
        assert_eq!(config.current_profile.as_deref(), Some("work"));
    }

    #[test]
    fn test_load_from_file() {
        let config = CliConfig {
            profiles: vec![profile("laptop", Role::SalesRep)],
            current_profile: Some("laptop".to_string()),
        };

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "{}",
            serde_json::to_string_pretty(&config).unwrap()
        )
        .unwrap();

        let loaded = CliConfig::load_from(temp_file.path()).unwrap();
        assert_eq!(loaded.profiles.len(), 1);
        assert_eq!(loaded.profiles[0].role, Role::SalesRep);
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let result = CliConfig::load_from("/nonexistent/path/config.json");
        assert!(matches!(result, Err(ConfigError::NotFound)));

        let empty = CliConfig::load_or_default("/nonexistent/path/config.json").unwrap();
        assert!(empty.profiles.is_empty());
    }

    #[test]
    fn test_load_from_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{ invalid json }}").unwrap();

        let result = CliConfig::load_from(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_unknown_role() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"profiles":[{{"name":"x","user_id":"{}","role":"owner"}}]}}"#,
            Uuid::from_u128(1)
        )
        .unwrap();

        let result = CliConfig::load_from(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_to_creates_parent_dirs() {
        let config = CliConfig::default();

        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("config.json");

        config.save_to(&nested_path).unwrap();

        assert!(nested_path.exists());
        let loaded = CliConfig::load_from(&nested_path).unwrap();
        assert!(loaded.profiles.is_empty());
    }

    #[test]
    fn test_default_path_returns_path() {
        let path = CliConfig::default_path();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains(".tasklane"));
    }
}
