//! Task date validation against a project envelope.

use chrono::NaiveDate;
use tracing::debug;

use crate::DateEnvelope;

/// Number of task date rules. A chain of fix-ups longer than this is
/// cycling.
pub const RULE_COUNT: usize = 3;

/// Which date field a suggestion should be written into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Start,
    Due,
}

/// A broken timeline rule together with the bound it was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Task due date is later than the project due date.
    DueAfterProjectDue { project_due: NaiveDate },
    /// Task start date is earlier than the project start date.
    StartBeforeProjectStart { project_start: NaiveDate },
    /// Task start date is later than the task due date.
    StartAfterDue { task_due: NaiveDate },
    /// Project start date is later than the project due date.
    ProjectStartAfterDue { project_due: NaiveDate },
    /// Milestone due date is later than the project due date.
    MilestoneAfterProjectDue { project_due: NaiveDate },
    /// Milestone due date is earlier than the project start date.
    MilestoneBeforeProjectStart { project_start: NaiveDate },
}

impl Violation {
    pub fn message(&self) -> String {
        match self {
            Violation::DueAfterProjectDue { project_due } => format!(
                "Task due date must be on or before the project due date ({})",
                project_due
            ),
            Violation::StartBeforeProjectStart { project_start } => format!(
                "Task start date must be on or after the project start date ({})",
                project_start
            ),
            Violation::StartAfterDue { task_due } => format!(
                "Task start date must be on or before the task due date ({})",
                task_due
            ),
            Violation::ProjectStartAfterDue { project_due } => format!(
                "Project start date must be on or before the project due date ({})",
                project_due
            ),
            Violation::MilestoneAfterProjectDue { project_due } => format!(
                "Milestone due date must be on or before the project due date ({})",
                project_due
            ),
            Violation::MilestoneBeforeProjectStart { project_start } => format!(
                "Milestone due date must be on or after the project start date ({})",
                project_start
            ),
        }
    }

    /// Replacement date that clears this violation.
    pub fn suggested_date(&self) -> NaiveDate {
        match *self {
            Violation::DueAfterProjectDue { project_due }
            | Violation::ProjectStartAfterDue { project_due }
            | Violation::MilestoneAfterProjectDue { project_due } => project_due,
            Violation::StartBeforeProjectStart { project_start }
            | Violation::MilestoneBeforeProjectStart { project_start } => project_start,
            Violation::StartAfterDue { task_due } => task_due,
        }
    }

    /// Field the suggested date belongs in.
    pub fn target(&self) -> DateField {
        match self {
            Violation::DueAfterProjectDue { .. }
            | Violation::MilestoneAfterProjectDue { .. }
            | Violation::MilestoneBeforeProjectStart { .. } => DateField::Due,
            Violation::StartBeforeProjectStart { .. }
            | Violation::StartAfterDue { .. }
            | Violation::ProjectStartAfterDue { .. } => DateField::Start,
        }
    }
}

/// Outcome of a date check. Invalid results carry the first violated rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateValidation {
    violation: Option<Violation>,
}

impl DateValidation {
    pub fn valid() -> Self {
        Self { violation: None }
    }

    pub fn invalid(violation: Violation) -> Self {
        Self {
            violation: Some(violation),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    pub fn message(&self) -> Option<String> {
        self.violation.as_ref().map(Violation::message)
    }

    pub fn suggested_date(&self) -> Option<NaiveDate> {
        self.violation.as_ref().map(Violation::suggested_date)
    }
}

impl From<Option<Violation>> for DateValidation {
    fn from(violation: Option<Violation>) -> Self {
        Self { violation }
    }
}

fn first_violation(
    envelope: &DateEnvelope,
    task_start: Option<NaiveDate>,
    task_due: Option<NaiveDate>,
) -> Option<Violation> {
    if let Some(due) = task_due {
        if due > envelope.due_date() {
            return Some(Violation::DueAfterProjectDue {
                project_due: envelope.due_date(),
            });
        }
    }
    if let (Some(start), Some(project_start)) = (task_start, envelope.start_date()) {
        if start < project_start {
            return Some(Violation::StartBeforeProjectStart { project_start });
        }
    }
    if let (Some(start), Some(due)) = (task_start, task_due) {
        if start > due {
            return Some(Violation::StartAfterDue { task_due: due });
        }
    }
    None
}

/// Check a task's dates against its project. Rules are checked in order
/// and the first failing one is reported.
pub fn validate_task_dates(
    envelope: &DateEnvelope,
    task_start: Option<NaiveDate>,
    task_due: Option<NaiveDate>,
) -> DateValidation {
    let violation = first_violation(envelope, task_start, task_due);
    if let Some(v) = &violation {
        debug!(
            ?task_start,
            ?task_due,
            suggested = %v.suggested_date(),
            "task dates rejected: {}",
            v.message()
        );
    }
    violation.into()
}
