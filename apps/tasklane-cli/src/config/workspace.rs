use serde::Deserialize;
use std::path::Path;
use tasklane_timeline::WeekStart;
use tracing::warn;

#[derive(Debug, Deserialize, Default)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub defaults: WorkspaceDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct WorkspaceDefaults {
    pub role: Option<String>,
    pub week_start: Option<WeekStart>,
    pub sort: Option<String>,
}

/// Workspace files probed in each directory, highest precedence first.
const WORKSPACE_FILES: [(&str, FileFormat); 4] = [
    ("tasklane.toml", FileFormat::Toml),
    ("tasklane.yaml", FileFormat::Yaml),
    ("tasklane.yml", FileFormat::Yaml),
    ("tasklane.json", FileFormat::Json),
];

#[derive(Clone, Copy, Debug)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn parse(self, content: &str) -> Result<WorkspaceConfig, Box<dyn std::error::Error>> {
        Ok(match self {
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        })
    }
}

/// A missing file is skipped silently; a malformed one is skipped with a warning.
fn read_workspace_file(path: &Path, format: FileFormat) -> Option<WorkspaceConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    format
        .parse(&content)
        .inspect_err(|e| warn!(path = %path.display(), "ignoring workspace file: {}", e))
        .ok()
}

pub fn find_workspace_config() -> Option<WorkspaceConfig> {
    let current_dir = std::env::current_dir().ok()?;
    find_workspace_config_from(&current_dir)
}

/// Nearest workspace file in `start` or any of its ancestors.
pub fn find_workspace_config_from(start: &Path) -> Option<WorkspaceConfig> {
    start.ancestors().find_map(|dir| {
        WORKSPACE_FILES
            .iter()
            .find_map(|(name, format)| read_workspace_file(&dir.join(name), *format))
    })
}
