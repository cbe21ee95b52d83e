//! Project types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{OrganizationId, ProjectId, ProjectPermissions, UserId};

/// Project record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub organization_id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_project_status")]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub owner_id: UserId,
    #[serde(default)]
    pub permissions: ProjectPermissions,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_project_status() -> String {
    "active".to_string()
}

/// Parameters for creating a project
#[derive(Clone, Debug)]
pub struct CreateProjectParams {
    pub organization_id: OrganizationId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub owner_id: UserId,
}

impl Project {
    /// Build a new project record. The creator becomes the owner and the
    /// default per-action overrides are attached.
    pub fn create(params: CreateProjectParams, now: DateTime<Utc>) -> Self {
        let permissions = ProjectPermissions::for_new_project(&params.owner_id);
        Self {
            id: ProjectId::new(),
            organization_id: params.organization_id,
            name: params.name,
            description: params.description,
            status: default_project_status(),
            start_date: params.start_date,
            due_date: params.due_date,
            owner_id: params.owner_id,
            permissions,
            created_at: now,
            updated_at: now,
        }
    }
}
