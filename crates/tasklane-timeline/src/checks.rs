//! Project and milestone date checks.

use chrono::NaiveDate;
use tracing::debug;

use crate::{DateEnvelope, DateValidation, Violation};

/// Check the dates on a project form before an envelope exists.
pub fn validate_project_dates(start: Option<NaiveDate>, due: NaiveDate) -> DateValidation {
    match start {
        Some(start) if start > due => {
            debug!(%start, %due, "project start after due");
            DateValidation::invalid(Violation::ProjectStartAfterDue { project_due: due })
        }
        _ => DateValidation::valid(),
    }
}

/// A milestone must fall inside its project's envelope. The suggestion is
/// whichever bound was crossed.
pub fn validate_milestone_date(envelope: &DateEnvelope, due: NaiveDate) -> DateValidation {
    let violation = if due > envelope.due_date() {
        Some(Violation::MilestoneAfterProjectDue {
            project_due: envelope.due_date(),
        })
    } else {
        envelope
            .start_date()
            .filter(|start| due < *start)
            .map(|project_start| Violation::MilestoneBeforeProjectStart { project_start })
    };
    if violation.is_some() {
        debug!(%due, "milestone outside project dates");
    }
    violation.into()
}
