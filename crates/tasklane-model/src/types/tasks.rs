//! Task types.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{MilestoneId, ProjectId, TaskId, UserId};

/// Task priority
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Error type for parsing Priority from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(pub String);

impl std::fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid priority: {}", self.0)
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

/// Task record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub milestone_id: Option<MilestoneId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String, // custom statuses are organization-defined
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: Option<UserId>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// The user a task belongs to for "edit own tasks" purposes.
    pub fn owner_id(&self) -> &UserId {
        &self.created_by
    }

    pub fn is_assigned_to(&self, user: &UserId) -> bool {
        self.assigned_to.as_ref() == Some(user)
    }
}

/// Parameters for creating a task
#[derive(Clone, Debug)]
pub struct CreateTaskParams {
    pub project_id: ProjectId,
    pub milestone_id: Option<MilestoneId>,
    pub title: String,
    pub status: String,
    pub priority: Priority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<UserId>,
    pub created_by: UserId,
}

impl Task {
    pub fn create(params: CreateTaskParams, now: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            project_id: params.project_id,
            milestone_id: params.milestone_id,
            title: params.title,
            description: None,
            status: params.status,
            priority: params.priority,
            start_date: params.start_date,
            due_date: params.due_date,
            assigned_to: params.assigned_to,
            created_by: params.created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
